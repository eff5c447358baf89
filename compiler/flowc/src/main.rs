//! Flow command-line front end.

use std::io::{self, BufRead, BufReader, Write};

use flow_eval::StdHostIo;
use flowc::cli::{parse_args, USAGE};
use flowc::commands::{run_batch, run_file, run_repl, sample_path};

fn main() {
    flowc::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    let mut stdout = io::stdout();
    let mut host = StdHostIo::new();

    let result = if options.batch {
        run_batch(BufReader::new(io::stdin()), &mut stdout, &mut host)
    } else if options.prompt_for_file {
        prompt_and_run()
    } else if options.interactive {
        run_repl(BufReader::new(io::stdin()), &mut stdout, &mut host)
    } else if let Some(file) = options.file {
        if !run_file(&file) {
            std::process::exit(1);
        }
        Ok(())
    } else {
        println!("{USAGE}");
        Ok(())
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Ask for one program name and run it from the samples folder.
fn prompt_and_run() -> io::Result<()> {
    print!("Enter file name: ");
    io::stdout().flush()?;

    let mut name = String::new();
    BufReader::new(io::stdin()).read_line(&mut name)?;
    if !run_file(&sample_path(name.trim())) {
        std::process::exit(1);
    }
    Ok(())
}

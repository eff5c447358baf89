use flow_ir::Program;
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use crate::io::ScriptedIo;
use crate::scope::ScopeId;

fn parse(source: &str) -> Program {
    flow_parse::parse(source).unwrap_or_else(|err| panic!("parse error: {err}"))
}

fn scripted(program: &Program) -> Interpreter<'_> {
    InterpreterBuilder::new(program)
        .host_io(ScriptedIo::new(""))
        .build()
}

#[test]
fn builder_defaults() {
    let program = Program::default();
    let interpreter = Interpreter::new(&program);
    assert_eq!(interpreter.max_call_depth(), DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(interpreter.call_depth(), 0);
    assert_eq!(interpreter.symbol_table().depth(), 1);
}

#[test]
fn builder_sets_call_depth() {
    let program = Program::default();
    let interpreter = InterpreterBuilder::new(&program)
        .max_call_depth(16)
        .build();
    assert_eq!(interpreter.max_call_depth(), 16);
}

#[test]
fn empty_program_has_no_output() {
    let program = Program::default();
    assert_eq!(scripted(&program).run(), Ok(String::new()));
}

#[test]
fn execute_keeps_globals() {
    let program = parse("val x = 41; var y: String;");
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.execute(), Ok(()));

    let table = interpreter.symbol_table();
    assert_eq!(table.resolve("x").map(|s| s.value().clone()), Some(crate::Value::Int(41)));
    assert_eq!(
        table.resolve("y").map(|s| s.value().clone()),
        Some(crate::Value::Str(String::new()))
    );
}

#[test]
fn run_resets_between_programs() {
    let program = parse("val x = 1; print(x);");
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.run().as_deref(), Ok("1\n"));
    // The second run would hit DuplicateSymbol if `x` had survived.
    assert_eq!(interpreter.run().as_deref(), Ok("1\n"));
    assert_eq!(interpreter.symbol_table().depth(), 1);
}

#[test]
fn failed_run_discards_output() {
    let program = parse("print(1); print(missing);");
    let mut interpreter = scripted(&program);
    let err = interpreter.run().err().map(|err| err.kind);
    assert_eq!(
        err,
        Some(EvalErrorKind::UndeclaredVariable {
            name: "missing".to_string()
        })
    );
    assert_eq!(interpreter.output(), "");
}

#[test]
fn faults_leave_scope_stack_balanced() {
    let program = parse(
        "fun f(n: Int): Int { if (n > 0) { while (true) { return g(); } } return 0; }
         f(1);",
    );
    let mut interpreter = scripted(&program);
    assert!(interpreter.execute().is_err());
    assert_eq!(interpreter.symbol_table().depth(), 1);
    assert_eq!(interpreter.symbol_table().current_scope(), ScopeId::GLOBAL);
    assert_eq!(interpreter.call_depth(), 0);
}

#[test]
fn local_scopes_are_destroyed() {
    let program = parse(
        "fun f(n: Int): Int { val doubled = n * 2; return doubled; }
         var total = 0;
         for (i in 0..10) { val step = f(i); total = total + step; }
         print(total);",
    );
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.execute(), Ok(()));
    assert_eq!(interpreter.output(), "90\n");
    // Only the global scope remains.
    assert_eq!(interpreter.symbol_table().scope_count(), 1);
}

#[test]
fn instance_scopes_outlive_construction() {
    let program = parse("class C { val v = 1; } val a = new C(); val b = new C();");
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.execute(), Ok(()));

    let table = interpreter.symbol_table();
    assert_eq!(table.scope_count(), 3);
    for name in ["a", "b"] {
        let handle = table
            .resolve(name)
            .and_then(|symbol| symbol.value().as_object())
            .cloned();
        let Some(handle) = handle else {
            panic!("{name} should hold an object");
        };
        let scope = table.get_scope(handle.scope);
        assert_eq!(scope.and_then(|s| s.parent()), Some(ScopeId::GLOBAL));
        assert_eq!(scope.map(|s| s.method_count()), Some(0));
    }
}

#[test]
fn instance_scopes_are_freed_with_their_objects() {
    let program = parse("class P { var x = 1; } for (i in 0..5000) { val p = new P(); }");
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.execute(), Ok(()));
    assert_eq!(interpreter.symbol_table().scope_count(), 1);
}

#[test]
fn reassigned_objects_are_freed() {
    let program = parse(
        "class Inner { val n = 1; }
         class P { val inner = new Inner(); }
         var p = new P();
         for (i in 0..10) { p = new P(); }",
    );
    let mut interpreter = scripted(&program);
    assert_eq!(interpreter.execute(), Ok(()));
    // The global scope plus the live P and its Inner.
    assert_eq!(interpreter.symbol_table().scope_count(), 3);
}

#[test]
fn recursion_limit_is_fatal() {
    let program = parse(
        "fun down(n: Int): Int { return down(n + 1); }
         try { down(0); } catch (e: String) { print(e); }",
    );
    let mut interpreter = InterpreterBuilder::new(&program)
        .host_io(ScriptedIo::new(""))
        .max_call_depth(64)
        .build();
    let err = interpreter.run().err().map(|err| err.kind);
    assert_eq!(err, Some(EvalErrorKind::RecursionLimit { limit: 64 }));
}

#[test]
fn statement_span_is_attached() {
    let source = "val x = 1;\nx = 2;";
    let program = parse(source);
    let Err(err) = scripted(&program).run() else {
        panic!("assigning a val should fail");
    };
    let span = err.span.map(|span| span.to_range());
    assert_eq!(span, Some(11..17));
}

#[test]
fn completion_is_return() {
    assert!(Completion::Return(crate::Value::Unit).is_return());
    assert!(!Completion::Normal.is_return());
}

//! Object construction, fields and methods.

use pretty_assertions::assert_eq;

use super::{name, run_err, run_ok};
use crate::EvalErrorKind;

const COUNTER: &str = "
class Counter {
    var count: Int = 0;
    val step: Int = 1;

    constructor(start: Int) {
        count = start;
    }

    fun increment(): Int {
        count = count + step;
        return count;
    }

    fun twice(): Int {
        increment();
        return increment();
    }
}
";

fn with_counter(body: &str) -> String {
    format!("{COUNTER}\n{body}")
}

#[test]
fn constructor_and_methods() {
    let output = run_ok(&with_counter(
        "val c = new Counter(10);
         print(c.increment());
         print(c.twice());
         print(c.count);",
    ));
    assert_eq!(output, "11\n13\n13\n");
}

#[test]
fn objects_have_independent_fields() {
    let output = run_ok(&with_counter(
        "val a = new Counter(0);
         val b = new Counter(0);
         a.count = 5;
         a.increment();
         print(a.count);
         print(b.count);",
    ));
    assert_eq!(output, "6\n0\n");
}

#[test]
fn field_assignment_checks_mutability_then_type() {
    assert_eq!(
        run_err(&with_counter("val c = new Counter(0); c.step = \"x\";")),
        EvalErrorKind::ImmutableAssignment { name: name("step") }
    );
    assert_eq!(
        run_err(&with_counter("val c = new Counter(0); c.count = 1.5;")),
        EvalErrorKind::TypeMismatch {
            expected: name("Int"),
            got: name("Double")
        }
    );
}

#[test]
fn unknown_field() {
    assert_eq!(
        run_err(&with_counter("val c = new Counter(0); print(c.total);")),
        EvalErrorKind::UndeclaredVariable { name: name("total") }
    );
}

#[test]
fn qualified_access_through_non_objects() {
    assert_eq!(
        run_err("val n = 1; print(n.value);"),
        EvalErrorKind::UnknownObject { name: name("n") }
    );
    assert_eq!(
        run_err("ghost.run();"),
        EvalErrorKind::UnknownObject { name: name("ghost") }
    );
}

#[test]
fn unknown_class_and_method() {
    assert_eq!(
        run_err("val x = new Missing();"),
        EvalErrorKind::UnknownClass { name: name("Missing") }
    );
    assert_eq!(
        run_err(&with_counter("val c = new Counter(0); c.reset();")),
        EvalErrorKind::UnknownMethod { name: name("reset") }
    );
}

#[test]
fn constructor_arity_and_types() {
    assert_eq!(
        run_err(&with_counter("val c = new Counter();")),
        EvalErrorKind::ArityMismatch {
            name: name("Counter"),
            expected: 1,
            got: 0
        }
    );
    assert_eq!(
        run_err(&with_counter("val c = new Counter(\"ten\");")),
        EvalErrorKind::TypeMismatch {
            expected: name("Int"),
            got: name("String")
        }
    );
}

#[test]
fn constructor_parameters_can_be_reassigned() {
    let output = run_ok(
        "class Box {
             var v: Int = 0;
             constructor(x: Int) { x = x + 1; v = x; }
         }
         val b = new Box(1);
         print(b.v);",
    );
    assert_eq!(output, "2\n");
}

#[test]
fn arguments_without_constructor() {
    assert_eq!(
        run_err("class Empty { } val e = new Empty(1);"),
        EvalErrorKind::UnexpectedArguments { class: name("Empty") }
    );
    assert_eq!(run_ok("class Empty { } val e = new Empty(); print(e);"), "<Empty object>\n");
}

#[test]
fn object_variable_name_must_be_free() {
    assert_eq!(
        run_err("class A { } val a = 1; val a = new A();"),
        EvalErrorKind::DuplicateSymbol { name: name("a") }
    );
}

#[test]
fn methods_do_not_see_creator_locals() {
    let kind = run_err(
        "class Viewer { fun look(): Int { return hidden; } }
         if (1 == 1) {
             val hidden = 3;
             val p = new Viewer();
             print(p.look());
         }",
    );
    assert_eq!(kind, EvalErrorKind::UndeclaredVariable { name: name("hidden") });
}

#[test]
fn constructor_arguments_evaluate_in_caller_scope() {
    let output = run_ok(
        "class Box { var value: Int = 0; constructor(v: Int) { value = v; } }
         val value = 9;
         val b = new Box(value);
         print(b.value);",
    );
    assert_eq!(output, "9\n");
}

#[test]
fn object_reassignment() {
    let output = run_ok(&with_counter(
        "var c = new Counter(1);
         c.increment();
         c = new Counter(100);
         print(c.count);",
    ));
    assert_eq!(output, "100\n");

    assert_eq!(
        run_err(&with_counter("val c = new Counter(1); c = new Counter(2);")),
        EvalErrorKind::ImmutableAssignment { name: name("c") }
    );
    assert_eq!(
        run_err(&with_counter(
            "class Other { } var c = new Counter(1); c = new Other();"
        )),
        EvalErrorKind::TypeMismatch {
            expected: name("Counter"),
            got: name("Other")
        }
    );
    assert_eq!(
        run_err("q = new Thing();"),
        EvalErrorKind::UndeclaredVariable { name: name("q") }
    );
}

#[test]
fn declared_object_variable_without_initializer() {
    let output = run_ok(
        "class P { val tag = \"p\"; }
         var p: P;
         print(p);
         p = new P();
         print(p.tag);",
    );
    assert_eq!(output, "\np\n");
}

#[test]
fn object_fields_holding_objects() {
    let output = run_ok(
        "class Inner { var n: Int = 1; fun get(): Int { return n; } }
         class Outer {
             val inner = new Inner();
             fun read(): Int { return inner.get(); }
         }
         val o = new Outer();
         print(o.read());",
    );
    assert_eq!(output, "1\n");
}

#[test]
fn method_calls_prefer_own_methods_over_functions() {
    let output = run_ok(
        "fun name(): String { return \"global\"; }
         class Named {
             fun name(): String { return \"method\"; }
             fun show(): String { return name(); }
         }
         val n = new Named();
         print(n.show());
         print(name());",
    );
    assert_eq!(output, "method\nglobal\n");
}

#[test]
fn methods_fall_back_to_global_functions() {
    let output = run_ok(
        "fun square(n: Int): Int { return n * n; }
         class Calc { fun nine(): Int { return square(3); } }
         val c = new Calc();
         print(c.nine());",
    );
    assert_eq!(output, "9\n");
}

#[test]
fn object_equality_is_identity() {
    let output = run_ok(
        "class T { }
         val a = new T();
         val b = new T();
         val c = a;
         print(a == b);
         print(a == c);",
    );
    assert_eq!(output, "false\ntrue\n");
}

#[test]
fn class_reregistration_is_rejected() {
    assert_eq!(
        run_err("class A { } class A { }"),
        EvalErrorKind::DuplicateSymbol { name: name("A") }
    );
}

#[test]
fn duplicate_method_names_are_rejected() {
    assert_eq!(
        run_err(
            "class A {
                 fun get(): Int { return 1; }
                 fun get(): Int { return 2; }
             }
             val a = new A();"
        ),
        EvalErrorKind::DuplicateSymbol { name: name("get") }
    );
}

#[test]
fn objects_returned_from_functions_stay_alive() {
    let output = run_ok(
        "class P { var x: Int = 1; }
         fun make(n: Int): P { val p = new P(); p.x = n; return p; }
         val q = make(5);
         print(q.x);",
    );
    assert_eq!(output, "5\n");
}

#[test]
fn receiver_survives_reassignment_during_its_call() {
    let output = run_ok(
        "class Node {
             var v: Int = 0;
             constructor(start: Int) { v = start; }
             fun swapAndRead(): Int { replace(); v = v + 1; return v; }
         }
         var n = new Node(1);
         fun replace() { n = new Node(50); }
         print(n.swapAndRead());
         print(n.v);",
    );
    assert_eq!(output, "2\n50\n");
}

#[test]
fn self_constructing_class_hits_the_call_limit() {
    assert!(matches!(
        run_err("class Loop { val next = new Loop(); } val l = new Loop();"),
        EvalErrorKind::RecursionLimit { .. }
    ));
}

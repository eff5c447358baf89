use flow_ir::{Block, ClassDef, FunctionDef, ParsedType, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use crate::symbol::Mutability;

fn int(name: &str, n: i64, mutability: Mutability) -> Symbol {
    Symbol::new(name, ParsedType::Int, mutability, Value::Int(n))
}

fn resolved(table: &SymbolTable<'_>, name: &str) -> Option<Value> {
    table.resolve(name).map(|symbol| symbol.value().clone())
}

fn function(name: &str) -> FunctionDef {
    FunctionDef {
        name: name.to_string(),
        params: vec![],
        return_type: ParsedType::Unit,
        body: Block::default(),
        span: Span::DUMMY,
    }
}

#[test]
fn starts_with_only_global() {
    let table = SymbolTable::new();
    assert_eq!(table.current_scope(), ScopeId::GLOBAL);
    assert_eq!(table.depth(), 1);
    assert_eq!(table.scope_count(), 1);
    assert_eq!(
        table.get_scope(ScopeId::GLOBAL).map(Scope::kind),
        Some(ScopeKind::Global)
    );
}

#[test]
fn local_scope_is_destroyed_on_pop() {
    let mut table = SymbolTable::new();
    let local = table.push_local();
    assert_eq!(table.current_scope(), local);
    assert_eq!(
        table.get_scope(local).and_then(Scope::parent),
        Some(ScopeId::GLOBAL)
    );
    assert!(table.define(int("x", 1, Mutability::Mutable)).is_ok());
    assert_eq!(resolved(&table, "x"), Some(Value::Int(1)));

    assert_eq!(table.pop_scope(), Some(local));
    assert!(table.get_scope(local).is_none());
    assert_eq!(resolved(&table, "x"), None);
}

#[test]
fn instance_scope_survives_pop() {
    let mut table = SymbolTable::new();
    let handle = table.new_class_scope("Point");
    let instance = handle.scope;
    assert!(table.enter_scope(instance));
    assert!(table.define(int("x", 3, Mutability::Mutable)).is_ok());
    table.pop_scope();

    let scope = table.get_scope(instance);
    assert_eq!(scope.and_then(Scope::display_name), Some("Point"));
    assert_eq!(
        table.resolve_from(instance, "x").map(|s| s.value().clone()),
        Some(Value::Int(3))
    );
}

#[test]
fn global_scope_is_never_popped() {
    let mut table = SymbolTable::new();
    assert_eq!(table.pop_scope(), None);
    assert_eq!(table.depth(), 1);
}

#[test]
fn ids_are_monotonic_across_clear() {
    let mut table = SymbolTable::new();
    let first = table.push_local();
    table.pop_scope();
    let second = table.push_local();
    assert!(second > first);

    table.clear();
    let third = table.push_local();
    assert!(third > second);
    assert_eq!(table.scope_count(), 2);
}

#[test]
fn shadowing_is_scope_local() {
    let mut table = SymbolTable::new();
    assert!(table.define(int("x", 1, Mutability::Mutable)).is_ok());
    table.push_local();
    assert!(table.define(int("x", 2, Mutability::Mutable)).is_ok());
    assert_eq!(table.assign("x", Value::Int(20)), Ok(()));
    assert_eq!(resolved(&table, "x"), Some(Value::Int(20)));
    table.pop_scope();
    assert_eq!(resolved(&table, "x"), Some(Value::Int(1)));
}

#[test]
fn duplicate_in_same_scope() {
    let mut table = SymbolTable::new();
    assert!(table.define(int("x", 1, Mutability::Mutable)).is_ok());
    let err = table.define(int("x", 2, Mutability::Mutable));
    assert_eq!(
        err.map_err(|e| e.kind),
        Err(EvalErrorKind::DuplicateSymbol {
            name: "x".to_string()
        })
    );
}

#[test]
fn assign_reports_immutable_and_undefined() {
    let mut table = SymbolTable::new();
    assert!(table.define(int("k", 1, Mutability::Immutable)).is_ok());
    table.push_local();
    assert_eq!(
        table.assign("k", Value::Int(2)),
        Err(AssignError::Immutable)
    );
    assert_eq!(
        table.assign("missing", Value::Int(2)),
        Err(AssignError::Undefined)
    );
}

#[test]
fn reparenting_hides_caller_locals() {
    let mut table = SymbolTable::new();
    table.push_local();
    assert!(table.define(int("secret", 1, Mutability::Mutable)).is_ok());

    let call = table.push_local();
    assert!(resolved(&table, "secret").is_some());
    assert!(table.set_parent(call, ScopeId::GLOBAL));
    assert!(resolved(&table, "secret").is_none());
}

#[test]
fn enclosing_instance_walks_parents() {
    let mut table = SymbolTable::new();
    assert_eq!(table.enclosing_instance(table.current_scope()), None);

    let handle = table.new_class_scope("Counter");
    assert!(table.enter_scope(handle.scope));
    table.push_local();
    let inner = table.push_local();
    assert_eq!(table.enclosing_instance(inner), Some(handle.scope));
}

#[test]
fn enter_scope_requires_live_id() {
    let mut table = SymbolTable::new();
    let handle = table.new_class_scope("A");
    assert_eq!(table.depth(), 1);
    assert!(table.enter_scope(handle.scope));
    assert_eq!(table.current_scope(), handle.scope);
    table.pop_scope();

    let local = table.push_local();
    table.pop_scope();
    assert!(!table.enter_scope(local));
}

#[test]
fn instance_scope_is_freed_with_its_last_handle() {
    let mut table = SymbolTable::new();
    table.push_local();
    let handle = table.new_class_scope("Point");
    let instance = handle.scope;
    let copy = handle.clone();
    assert_eq!(handle.handle_count(), 2);
    assert!(table
        .define(Symbol::new(
            "p",
            ParsedType::Class("Point".to_string()),
            Mutability::Mutable,
            Value::Object(handle),
        ))
        .is_ok());

    drop(copy);
    table.free_released();
    assert!(table.get_scope(instance).is_some());

    // Destroying the local scope drops the symbol holding the last handle.
    table.pop_scope();
    assert!(table.get_scope(instance).is_none());
    assert_eq!(table.scope_count(), 1);
}

#[test]
fn reassignment_frees_the_previous_instance() {
    let mut table = SymbolTable::new();
    let first = table.new_class_scope("Point");
    let first_id = first.scope;
    assert!(table
        .define(Symbol::new(
            "p",
            ParsedType::Class("Point".to_string()),
            Mutability::Mutable,
            Value::Object(first),
        ))
        .is_ok());

    let second = table.new_class_scope("Point");
    let second_id = second.scope;
    assert_eq!(table.assign("p", Value::Object(second)), Ok(()));
    assert!(table.get_scope(first_id).is_none());
    assert!(table.get_scope(second_id).is_some());
}

#[test]
fn active_instance_scope_is_kept_until_left() {
    let mut table = SymbolTable::new();
    let handle = table.new_class_scope("Point");
    let instance = handle.scope;
    assert!(table.enter_scope(instance));
    let call = table.push_local();
    assert!(table.set_parent(call, instance));

    drop(handle);
    table.free_released();
    assert!(table.get_scope(instance).is_some());

    table.pop_scope();
    assert!(table.get_scope(instance).is_some());
    table.pop_scope();
    assert!(table.get_scope(instance).is_none());
}

#[test]
fn freeing_cascades_through_fields() {
    let mut table = SymbolTable::new();
    let outer = table.new_class_scope("Outer");
    let outer_id = outer.scope;
    assert!(table.enter_scope(outer_id));
    let inner = table.new_class_scope("Inner");
    let inner_id = inner.scope;
    assert!(table
        .define(Symbol::new(
            "inner",
            ParsedType::Class("Inner".to_string()),
            Mutability::Immutable,
            Value::Object(inner),
        ))
        .is_ok());
    table.pop_scope();
    assert_eq!(table.scope_count(), 3);

    drop(outer);
    table.free_released();
    assert!(table.get_scope(outer_id).is_none());
    assert!(table.get_scope(inner_id).is_none());
    assert_eq!(table.scope_count(), 1);
}

#[test]
fn class_and_function_tables_reject_redefinition() {
    let class_def = ClassDef {
        name: "A".to_string(),
        members: vec![],
        span: Span::DUMMY,
    };
    let fun_def = function("f");

    let mut table = SymbolTable::new();
    assert!(table.define_class(ClassDeclaration::new(&class_def)).is_ok());
    assert!(table.define_class(ClassDeclaration::new(&class_def)).is_err());
    assert!(table.define_function(MethodDeclaration::new(&fun_def)).is_ok());
    assert!(table.define_function(MethodDeclaration::new(&fun_def)).is_err());

    assert_eq!(table.class("A").map(|c| c.name()), Some("A"));
    assert_eq!(table.function("f").map(|f| f.name()), Some("f"));
    assert!(table.class("B").is_none());

    table.clear();
    assert!(table.class("A").is_none());
    assert!(table.function("f").is_none());
}

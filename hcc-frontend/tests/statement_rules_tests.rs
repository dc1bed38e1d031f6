//! Statement typing rules

mod common;

use common::{in_function, in_main, reported, run, type_of};
use hcc_common::DiagnosticKind::*;
use hcc_frontend::{AstBuilder, BinaryOp, Type, UnaryOp};
use pretty_assertions::assert_eq;

#[test]
fn test_local_declaration_is_void() {
    let mut b = AstBuilder::new();
    let x = b.declare("x", Type::int());
    let decl = b.var_decl(x, (2, 5));
    let decl_id = decl.node_id;
    let stmt = b.local(decl);
    let stmt_id = stmt.node_id;

    let report = run(&in_main(b, vec![stmt]));
    assert_eq!(type_of(&report, decl_id), Some(Type::void()));
    assert_eq!(type_of(&report, stmt_id), Some(Type::void()));
    assert!(report.succeeded);
}

#[test]
fn test_assignment_statement() {
    let mut b = AstBuilder::new();
    let x = b.declare("x", Type::int());
    let target = b.id(x, (2, 1));
    let value = b.int(1, (2, 5));
    let assign = b.assign(target, value, (2, 3));
    let ok = b.assign_stmt(assign, (2, 1));
    let ok_id = ok.node_id;

    let target = b.id(x, (3, 1));
    let value = b.char('c', (3, 5));
    let assign = b.assign(target, value, (3, 3));
    let bad = b.assign_stmt(assign, (3, 1));
    let bad_id = bad.node_id;

    let report = run(&in_main(b, vec![ok, bad]));
    assert_eq!(type_of(&report, ok_id), Some(Type::void()));
    assert_eq!(type_of(&report, bad_id), Some(Type::error()));
    assert_eq!(reported(&report), vec![(InvalidAssignmentOperator, 3, 3)]);
}

#[test]
fn test_call_statement() {
    let mut b = AstBuilder::new();
    let f = b.declare_function("f", vec![], Type::int());
    let x = b.declare("x", Type::int());

    let callee = b.id(f, (2, 1));
    let call = b.call(callee, vec![], (2, 1));
    let ok = b.call_stmt(call, (2, 1));
    let ok_id = ok.node_id;

    let callee = b.id(x, (3, 1));
    let call = b.call(callee, vec![], (3, 1));
    let bad = b.call_stmt(call, (3, 1));
    let bad_id = bad.node_id;

    let report = run(&in_main(b, vec![ok, bad]));
    assert_eq!(type_of(&report, ok_id), Some(Type::void()));
    assert_eq!(type_of(&report, bad_id), Some(Type::error()));
    assert_eq!(reported(&report), vec![(BadCallee, 3, 1)]);
}

#[test]
fn test_post_increment_and_decrement() {
    let mut b = AstBuilder::new();
    let i = b.declare("i", Type::int());
    let p = b.declare("p", Type::pointer(Type::int(), 1));
    let flag = b.declare("flag", Type::bool());

    let lval = b.id(i, (2, 1));
    let inc = b.post_inc(lval, (2, 1));
    let inc_id = inc.node_id;
    let lval = b.id(p, (3, 3));
    let ptr_dec = b.post_dec(lval, (3, 1));
    let lval = b.id(flag, (4, 3));
    let bool_inc = b.post_inc(lval, (4, 1));

    let report = run(&in_main(b, vec![inc, ptr_dec, bool_inc]));
    assert_eq!(type_of(&report, inc_id), Some(Type::int()));
    assert_eq!(
        reported(&report),
        vec![(InvalidPointerOperator, 3, 1), (BadArithmeticOperand, 4, 3)]
    );
}

#[test]
fn test_conditions() {
    let mut b = AstBuilder::new();
    let cond = b.bool(true, (2, 4));
    let good_if = b.if_then(cond, vec![], (2, 1));
    let good_id = good_if.node_id;

    let cond = b.int(1, (3, 4));
    let bad_if = b.if_then(cond, vec![], (3, 1));
    let bad_id = bad_if.node_id;

    let cond = b.char('c', (4, 4));
    let bad_if_else = b.if_else(cond, vec![], vec![], (4, 1));

    let cond = b.int(0, (5, 7));
    let bad_while = b.while_loop(cond, vec![], (5, 1));

    let report = run(&in_main(b, vec![good_if, bad_if, bad_if_else, bad_while]));
    assert_eq!(type_of(&report, good_id), Some(Type::bool()));
    assert_eq!(type_of(&report, bad_id), Some(Type::error()));
    assert_eq!(
        reported(&report),
        vec![(BadIfCondition, 3, 4), (BadIfCondition, 4, 4), (BadWhileCondition, 5, 7)]
    );
}

#[test]
fn test_valid_condition_types_the_statement() {
    let mut b = AstBuilder::new();
    let cond = b.bool(true, (2, 4));
    let if_stmt = b.if_then(cond, vec![], (2, 1));
    let if_id = if_stmt.node_id;

    let cond = b.bool(false, (3, 4));
    let if_else = b.if_else(cond, vec![], vec![], (3, 1));
    let if_else_id = if_else.node_id;

    let flag = b.declare("flag", Type::bool());
    let cond = b.id(flag, (4, 7));
    let while_stmt = b.while_loop(cond, vec![], (4, 1));
    let while_id = while_stmt.node_id;

    let report = run(&in_main(b, vec![if_stmt, if_else, while_stmt]));
    assert!(report.succeeded);
    assert_eq!(type_of(&report, if_id), Some(Type::bool()));
    assert_eq!(type_of(&report, if_else_id), Some(Type::bool()));
    assert_eq!(type_of(&report, while_id), Some(Type::bool()));
}

#[test]
fn test_error_condition_is_silent() {
    let mut b = AstBuilder::new();
    let one = b.int(1, (2, 9));
    let cond = b.unary(UnaryOp::Not, one, (2, 8));
    let stmt = b.while_loop(cond, vec![], (2, 1));
    let stmt_id = stmt.node_id;

    let report = run(&in_main(b, vec![stmt]));
    assert_eq!(type_of(&report, stmt_id), Some(Type::error()));
    assert_eq!(reported(&report), vec![(BadLogicalOperand, 2, 9)]);
}

#[test]
fn test_bodies_are_analyzed_after_bad_condition() {
    let mut b = AstBuilder::new();
    let then_value = b.bool(true, (3, 16));
    let then_write = b.write(then_value, (3, 5));
    let v = b.declare_function("v", vec![], Type::void());
    let callee = b.id(v, (5, 16));
    let call = b.call(callee, vec![], (5, 16));
    let else_write = b.write(call, (5, 5));

    let cond = b.int(1, (2, 4));
    let stmt = b.if_else(cond, vec![then_write], vec![else_write], (2, 1));

    let report = run(&in_main(b, vec![stmt]));
    assert_eq!(reported(&report), vec![(BadIfCondition, 2, 4), (WriteVoid, 5, 16)]);
}

#[test]
fn test_return_rules() {
    let mut b = AstBuilder::new();
    let ret = b.return_void((2, 1));
    let ret_id = ret.node_id;
    let report = run(&in_main(b, vec![ret]));
    assert_eq!(type_of(&report, ret_id), Some(Type::void()));
    assert!(report.succeeded);

    let mut b = AstBuilder::new();
    let value = b.char('c', (2, 8));
    let ret = b.return_value(value, (2, 1));
    let report = run(&in_function(b, "f", Type::int(), vec![ret]));
    assert_eq!(reported(&report), vec![(BadReturnValue, 2, 8)]);

    let mut b = AstBuilder::new();
    let value = b.int(4, (2, 8));
    let ret = b.return_value(value, (2, 1));
    let ret_id = ret.node_id;
    let report = run(&in_function(b, "f", Type::int(), vec![ret]));
    assert_eq!(type_of(&report, ret_id), Some(Type::int()));
    assert!(report.succeeded);
}

#[test]
fn test_return_of_error_value_is_silent() {
    let mut b = AstBuilder::new();
    let one = b.int(1, (2, 12));
    let value = b.unary(UnaryOp::Not, one, (2, 8));
    let ret = b.return_value(value, (2, 1));
    let ret_id = ret.node_id;

    let report = run(&in_function(b, "f", Type::bool(), vec![ret]));
    assert_eq!(type_of(&report, ret_id), Some(Type::error()));
    assert_eq!(reported(&report), vec![(BadLogicalOperand, 2, 12)]);
}

#[test]
fn test_extraneous_return_value_is_analyzed() {
    let mut b = AstBuilder::new();
    let t = b.bool(true, (2, 8));
    let one = b.int(1, (2, 15));
    let value = b.binary(BinaryOp::Add, t, one, (2, 13));
    let value_id = value.node_id;
    let ret = b.return_value(value, (2, 1));

    let report = run(&in_main(b, vec![ret]));
    assert_eq!(type_of(&report, value_id), Some(Type::error()));
    assert_eq!(
        reported(&report),
        vec![(BadArithmeticOperand, 2, 8), (ExtraneousReturnValue, 2, 13)]
    );
}

#[test]
fn test_nested_return_sees_enclosing_function() {
    let mut b = AstBuilder::new();
    let inner_ret = b.return_void((4, 9));
    let cond = b.bool(true, (3, 12));
    let inner = b.while_loop(cond, vec![inner_ret], (3, 5));
    let cond = b.bool(false, (2, 4));
    let outer = b.if_else(cond, vec![], vec![inner], (2, 1));

    let report = run(&in_function(b, "f", Type::char(), vec![outer]));
    assert_eq!(reported(&report), vec![(MissingReturnValue, 4, 9)]);
}

#[test]
fn test_read() {
    let mut b = AstBuilder::new();
    let x = b.declare("x", Type::char());
    let p = b.declare("p", Type::pointer(Type::char(), 1));
    let f = b.declare_function("f", vec![], Type::void());

    let dst = b.id(x, (2, 14));
    let ok = b.read(dst, (2, 1));
    let ok_id = ok.node_id;
    let dst = b.id(p, (3, 14));
    let into_ptr = b.read(dst, (3, 1));
    let dst = b.id(f, (4, 14));
    let into_fn = b.read(dst, (4, 1));

    let report = run(&in_main(b, vec![ok, into_ptr, into_fn]));
    assert_eq!(type_of(&report, ok_id), Some(Type::char()));
    assert_eq!(
        reported(&report),
        vec![(ReadIntoPointer, 3, 14), (ReadIntoFunction, 4, 14)]
    );
}

#[test]
fn test_write() {
    let mut b = AstBuilder::new();
    let s = b.declare("s", Type::pointer(Type::char(), 1));
    let pp = b.declare("pp", Type::pointer(Type::char(), 2));
    let f = b.declare_function("f", vec![], Type::int());

    let src = b.id(s, (2, 12));
    let string = b.write(src, (2, 1));
    let string_id = string.node_id;
    let src = b.string("hello", (3, 12));
    let literal = b.write(src, (3, 1));
    let src = b.id(pp, (4, 12));
    let double_ptr = b.write(src, (4, 1));
    let src = b.id(f, (5, 12));
    let function = b.write(src, (5, 1));
    let callee = b.id(f, (6, 12));
    let src = b.call(callee, vec![], (6, 12));
    let result = b.write(src, (6, 1));

    let report = run(&in_main(b, vec![string, literal, double_ptr, function, result]));
    assert_eq!(type_of(&report, string_id), Some(Type::void()));
    assert_eq!(
        reported(&report),
        vec![(WriteRawPointer, 4, 12), (WriteFunction, 5, 12)]
    );
}

#[test]
fn test_io_with_error_operand_is_silent() {
    let mut b = AstBuilder::new();
    let x = b.declare("x", Type::int());
    let base = b.id(x, (2, 14));
    let offset = b.int(0, (2, 16));
    let dst = b.index(base, offset, (2, 14));
    let read = b.read(dst, (2, 1));
    let read_id = read.node_id;

    let base = b.id(x, (3, 12));
    let offset = b.int(0, (3, 14));
    let src = b.index(base, offset, (3, 12));
    let write = b.write(src, (3, 1));
    let write_id = write.node_id;

    let report = run(&in_main(b, vec![read, write]));
    assert_eq!(type_of(&report, read_id), Some(Type::error()));
    assert_eq!(type_of(&report, write_id), Some(Type::error()));
    assert_eq!(
        reported(&report),
        vec![(BadPointerBase, 2, 14), (BadPointerBase, 3, 12)]
    );
}

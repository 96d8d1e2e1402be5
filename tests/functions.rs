use std::{cell::RefCell, rc::Rc};

use exprcalc::{
    Expr, Func, FuncEnv, Function, Functions, ParseError, Var, Variables,
    builtin::{self, BUILTIN_FUNCTIONS},
    evaluate, parse,
};
use rstest::rstest;

fn accumulate() -> Func {
    Func::new(|args, env| {
        let total = env.entry("total".to_string()).or_insert(0.0);
        *total += args[0].eval();
        *total
    })
}

#[test]
fn call_environment_persists_per_node() {
    let sum = accumulate().bind(vec![Expr::Constant(2.0)]);
    assert_eq!(sum.eval(), 2.0);
    assert_eq!(sum.eval(), 4.0);

    let x = Var::new(0.0);
    let sum_var = accumulate().bind(vec![Expr::Variable(x.clone())]);
    assert_eq!(sum_var.eval(), 0.0);
    x.set(2.0);
    assert_eq!(sum_var.eval(), 2.0);
    x.set(5.0);
    assert_eq!(sum_var.eval(), 7.0);
    x.set(8.0);
    assert_eq!(sum_var.eval(), 15.0);
}

#[test]
fn call_sites_do_not_share_environments() {
    let mut funcs = Functions::new();
    funcs.insert("acc".to_string(), accumulate());
    let mut vars = Variables::new();

    let expr = parse("acc(1) + acc(100)", &mut vars, &funcs).unwrap();
    assert_eq!(expr.eval(), 101.0);
    assert_eq!(expr.eval(), 202.0);

    let again = parse("acc(1)", &mut vars, &funcs).unwrap();
    assert_eq!(again.eval(), 1.0);
    assert_eq!(expr.eval(), 303.0);
}

#[test]
fn arguments_arrive_in_source_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = {
        let seen = Rc::clone(&seen);
        Func::new(move |args, _| {
            seen.borrow_mut().extend(args.iter().map(Expr::eval));
            0.0
        })
    };
    let mut funcs = Functions::new();
    funcs.insert("record".to_string(), record);

    let expr = parse("record(3, 7, 9), record(1+1, (4, 5))", &mut Variables::new(), &funcs).unwrap();
    let _ = expr.eval();

    assert_eq!(*seen.borrow(), vec![3.0, 7.0, 9.0, 2.0, 5.0]);
}

#[test]
fn arguments_are_evaluated_only_on_demand() {
    let mut funcs = Functions::new();
    funcs.insert("never".to_string(), Func::new(|_, _| 1.0));
    funcs.insert("twice".to_string(), Func::new(|args, _| args[0].eval() + args[0].eval()));
    let mut vars = Variables::new();

    assert_eq!(parse("never(x = 5)", &mut vars, &funcs).unwrap().eval(), 1.0);
    assert_eq!(vars["x"].eval(), 0.0);

    assert_eq!(parse("twice(x = x + 1)", &mut vars, &funcs).unwrap().eval(), 3.0);
    assert_eq!(vars["x"].eval(), 2.0);
}

#[test]
fn empty_argument_list() {
    let mut funcs = Functions::new();
    funcs.insert("count".to_string(), Func::new(|args, _| args.len() as f64));

    let expr = parse("count() + count(1, 2)", &mut Variables::new(), &funcs).unwrap();
    assert_eq!(expr.eval(), 2.0);
}

#[test]
fn function_names_shadow_variables() {
    let mut funcs = Functions::new();
    funcs.insert("x".to_string(), Func::new(|_, _| 42.0));
    let mut vars = Variables::new();
    vars.insert("x".to_string(), Var::new(1.0));

    assert_eq!(parse("x()", &mut vars, &funcs).unwrap().eval(), 42.0);
    assert_eq!(parse("x", &mut vars, &funcs).unwrap_err(), ParseError::BadCall);
}

struct Scale(f64);

impl Function for Scale {
    fn call(&self, args: &[Expr], _env: &mut FuncEnv) -> f64 {
        args.iter().map(Expr::eval).sum::<f64>() * self.0
    }
}

#[test]
fn trait_implementations_can_be_registered() {
    let mut funcs = Functions::new();
    funcs.insert("triple".to_string(), Func::from_function(Scale(3.0)));

    let expr = parse("triple(1, 2) - 1", &mut Variables::new(), &funcs).unwrap();
    assert_eq!(expr.eval(), 8.0);
}

#[rstest]
#[case("abs(-3)", 3.0)]
#[case("abs()", 0.0)]
#[case("floor(2.7)", 2.0)]
#[case("ceil(2.1)", 3.0)]
#[case("round(2.5)", 3.0)]
#[case("trunc(-2.7)", -2.0)]
#[case("sign(-4)", -1.0)]
#[case("sign(0)", 0.0)]
#[case("sign(0.5)", 1.0)]
#[case("min(4, 2, 8)", 2.0)]
#[case("max(4, 2, 8)", 8.0)]
#[case("max()", 0.0)]
#[case("pow(2, 10)", 1024.0)]
#[case("pow(2, -1)", 0.5)]
#[case("if(0, 1, 2)", 2.0)]
#[case("if(3 > 2, 1, 2)", 1.0)]
#[case("if(1, 5)", 5.0)]
#[case("if(0, 5)", 0.0)]
#[case("accum(4)", 4.0)]
#[case("x = 3, if(x == 3, accum(x), -1)", 3.0)]
fn builtins(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(evaluate(src), Ok(expected), "{src}");
}

#[test]
fn builtin_table_lists_every_function() {
    let funcs = builtin::functions();

    assert_eq!(funcs.len(), BUILTIN_FUNCTIONS.len());
    for name in BUILTIN_FUNCTIONS {
        assert!(funcs.contains_key(*name), "{name}");
    }
}

#[test]
fn builtin_table_can_be_extended() {
    let mut funcs = builtin::functions();
    funcs.insert("double".to_string(), Func::new(|args, _| args[0].eval() * 2.0));

    let expr = parse("double(max(1, 4))", &mut Variables::new(), &funcs).unwrap();
    assert_eq!(expr.eval(), 8.0);
}

#[test]
fn accumulator_keeps_state_per_tree() {
    let mut vars = Variables::new();
    let funcs = builtin::functions();
    let expr = parse("accum(x)", &mut vars, &funcs).unwrap();

    vars["x"].set(2.0);
    assert_eq!(expr.eval(), 2.0);
    vars["x"].set(3.0);
    assert_eq!(expr.eval(), 5.0);
}

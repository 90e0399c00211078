use pretty_assertions::assert_eq;

use crate::tests::support::eval;

#[test]
fn bool_truthy_values() {
    for value in ["1", "ON", "on", "YES", "TRUE", "Y", "2", "anything"] {
        assert_eq!(eval(&format!("$<BOOL:{value}>")).value, "1", "{value}");
    }
}

#[test]
fn bool_falsy_values() {
    for value in [
        "",
        "0",
        "OFF",
        "off",
        "NO",
        "FALSE",
        "N",
        "IGNORE",
        "NOTFOUND",
        "LIBZ-NOTFOUND",
    ] {
        assert_eq!(eval(&format!("$<BOOL:{value}>")).value, "", "{value}");
    }
}

#[test]
fn whitespace_only_is_true() {
    // Only the empty string and the documented false constants coerce to
    // false; whitespace does not.
    assert_eq!(eval("$<BOOL: >").value, "1");
}

#[test]
fn and_or_not() {
    assert_eq!(eval("$<AND:1,1,1>").value, "1");
    assert_eq!(eval("$<AND:1,0,1>").value, "");
    assert_eq!(eval("$<OR:0,0>").value, "");
    assert_eq!(eval("$<OR:0,1>").value, "1");
    assert_eq!(eval("$<NOT:0>").value, "1");
    assert_eq!(eval("$<NOT:1>").value, "");
}

#[test]
fn boolean_nodes_compose() {
    // Inner nodes produce "1"/"" and outer nodes coerce either form.
    assert_eq!(eval("$<AND:$<BOOL:ON>,$<NOT:$<BOOL:OFF>>>").value, "1");
    assert_eq!(eval("$<OR:$<BOOL:OFF>,$<BOOL:NO>>").value, "");
}

#[test]
fn if_selects_by_condition() {
    assert_eq!(eval("$<IF:1,yes,no>").value, "yes");
    assert_eq!(eval("$<IF:0,yes,no>").value, "no");
    assert_eq!(eval("$<IF:$<BOOL:ON>,yes,no>").value, "yes");
    // Branches may be empty.
    assert_eq!(eval("$<IF:0,yes,>").value, "");
}

#[test]
fn if_requires_three_parameters() {
    let result = eval("$<IF:1,only>");
    assert_eq!(result.value, "");
    assert!(result.had_error());
}

#[test]
fn not_requires_exactly_one_parameter() {
    let result = eval("$<NOT:1,0>");
    assert_eq!(result.value, "");
    assert!(result.had_error());
}

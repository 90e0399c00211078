use pretty_assertions::assert_eq;

use crate::tests::support::{TestProject, eval_in};

#[test]
fn target_exists() {
    let project = TestProject::new().with_target("zlib");
    assert_eq!(eval_in(&project, "$<TARGET_EXISTS:zlib>", None, "Debug").value, "1");
    assert_eq!(eval_in(&project, "$<TARGET_EXISTS:png>", None, "Debug").value, "");
}

#[test]
fn target_exists_rejects_bad_names() {
    let project = TestProject::new();
    let result = eval_in(&project, "$<TARGET_EXISTS:not a target>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());

    let empty = eval_in(&project, "$<TARGET_EXISTS:>", None, "Debug");
    assert!(empty.had_error());
}

#[test]
fn target_name_if_exists() {
    let project = TestProject::new().with_target("zlib");
    assert_eq!(
        eval_in(&project, "$<TARGET_NAME_IF_EXISTS:zlib>", None, "Debug").value,
        "zlib"
    );
    assert_eq!(
        eval_in(&project, "$<TARGET_NAME_IF_EXISTS:png>", None, "Debug").value,
        ""
    );
}

#[test]
fn target_property_two_parameter_form() {
    let project = TestProject::new().with_property("lib", "CUSTOM_FLAG", "on");
    assert_eq!(
        eval_in(&project, "$<TARGET_PROPERTY:lib,CUSTOM_FLAG>", None, "Debug").value,
        "on"
    );
}

#[test]
fn target_property_head_form() {
    let project = TestProject::new().with_property("app", "OUTPUT_NAME", "app2");
    assert_eq!(
        eval_in(&project, "$<TARGET_PROPERTY:OUTPUT_NAME>", Some("app"), "Debug").value,
        "app2"
    );
}

#[test]
fn target_property_head_form_needs_a_head_target() {
    let project = TestProject::new();
    let result = eval_in(&project, "$<TARGET_PROPERTY:OUTPUT_NAME>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());
}

#[test]
fn unset_property_is_empty_without_diagnostic() {
    let project = TestProject::new().with_target("lib");
    let result = eval_in(&project, "$<TARGET_PROPERTY:lib,NOT_SET>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn missing_target_diagnoses() {
    let project = TestProject::new();
    let result = eval_in(&project, "$<TARGET_PROPERTY:ghost,P>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());
    assert!(result.diagnostics[0].message.contains("ghost"));
}

#[test]
fn invalid_property_name_diagnoses() {
    let project = TestProject::new().with_target("lib");
    let result = eval_in(&project, "$<TARGET_PROPERTY:lib,bad-name>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());
}

#[test]
fn property_values_are_evaluated_in_the_consumer_context() {
    // The property value itself carries a config-conditional expression.
    let project = TestProject::new().with_property(
        "lib",
        "CUSTOM_DEFS",
        "$<$<CONFIG:Debug>:TRACE>",
    );

    let debug = eval_in(&project, "$<TARGET_PROPERTY:lib,CUSTOM_DEFS>", None, "Debug");
    assert_eq!(debug.value, "TRACE");

    let release = eval_in(&project, "$<TARGET_PROPERTY:lib,CUSTOM_DEFS>", None, "Release");
    assert_eq!(release.value, "");
}

#[test]
fn property_chains_follow_references() {
    let project = TestProject::new()
        .with_property("a", "P", "$<TARGET_PROPERTY:b,Q>")
        .with_property("b", "Q", "end");
    assert_eq!(
        eval_in(&project, "$<TARGET_PROPERTY:a,P>", None, "Debug").value,
        "end"
    );
}

#[test]
fn direct_cycle_terminates_with_a_diagnostic() {
    let project = TestProject::new().with_property("lib", "P", "$<TARGET_PROPERTY:lib,P>");
    let result = eval_in(&project, "$<TARGET_PROPERTY:lib,P>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());
    assert!(
        result.diagnostics[0]
            .message
            .contains("self-referencing property chain")
    );
}

#[test]
fn mutual_cycle_reports_the_chain() {
    let project = TestProject::new()
        .with_property("a", "P", "$<TARGET_PROPERTY:b,Q>")
        .with_property("b", "Q", "$<TARGET_PROPERTY:a,P>");
    let result = eval_in(&project, "$<TARGET_PROPERTY:a,P>", None, "Debug");
    assert_eq!(result.value, "");
    assert!(result.had_error());
    let message = &result.diagnostics[0].message;
    assert!(message.contains("a[P]"), "{message}");
    assert!(message.contains("b[Q]"), "{message}");
}

#[test]
fn cycle_failure_does_not_poison_siblings() {
    let project = TestProject::new().with_property("lib", "P", "$<TARGET_PROPERTY:lib,P>");
    let result = eval_in(
        &project,
        "before-$<TARGET_PROPERTY:lib,P>-after",
        None,
        "Debug",
    );
    assert_eq!(result.value, "before--after");
    assert!(result.had_error());
}

#[test]
fn interface_properties_gather_over_the_link_interface() {
    let project = TestProject::new()
        .with_property("top", "INTERFACE_COMPILE_DEFINITIONS", "TOP")
        .with_property("top", "INTERFACE_LINK_LIBRARIES", "dep")
        .with_property("dep", "INTERFACE_COMPILE_DEFINITIONS", "DEP");
    assert_eq!(
        eval_in(
            &project,
            "$<TARGET_PROPERTY:top,INTERFACE_COMPILE_DEFINITIONS>",
            None,
            "Debug"
        )
        .value,
        "TOP;DEP"
    );
}

#[test_log::test]
fn diamond_dependencies_expand_once() {
    // top -> left, right; both link shared. Its definitions must appear once.
    let project = TestProject::new()
        .with_property("top", "INTERFACE_LINK_LIBRARIES", "left;right")
        .with_target("top")
        .with_property("left", "INTERFACE_LINK_LIBRARIES", "shared")
        .with_property("left", "INTERFACE_COMPILE_DEFINITIONS", "LEFT")
        .with_property("right", "INTERFACE_LINK_LIBRARIES", "shared")
        .with_property("right", "INTERFACE_COMPILE_DEFINITIONS", "RIGHT")
        .with_property("shared", "INTERFACE_COMPILE_DEFINITIONS", "SHARED");
    assert_eq!(
        eval_in(
            &project,
            "$<TARGET_PROPERTY:top,INTERFACE_COMPILE_DEFINITIONS>",
            None,
            "Debug"
        )
        .value,
        "LEFT;SHARED;RIGHT"
    );
}

#[test]
fn nonexistent_link_dependencies_are_skipped() {
    let project = TestProject::new()
        .with_property("top", "INTERFACE_COMPILE_DEFINITIONS", "TOP")
        .with_property("top", "INTERFACE_LINK_LIBRARIES", "-lsystem;dep")
        .with_property("dep", "INTERFACE_COMPILE_DEFINITIONS", "DEP");
    // `-lsystem` is a raw linker flag, not a target; it contributes nothing.
    let result = eval_in(
        &project,
        "$<TARGET_PROPERTY:top,INTERFACE_COMPILE_DEFINITIONS>",
        None,
        "Debug",
    );
    assert_eq!(result.value, "TOP;DEP");
    assert!(result.diagnostics.is_empty());
}

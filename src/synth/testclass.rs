//! Test Class Synthesizer: one `ClassModel` in, one `GeneratedTestClass` out.
//!
//! Synthesis is a pure function of the class model and the fixed NUnit/Moq
//! conventions below; identical input always yields byte-identical output.

use crate::emit::{self, FieldDecl, RoutineDecl, TestFile, TestFixture};
use crate::model::{
    ClassModel, GeneratedTestClass, MethodSignature, Parameter, ReturnType, TypeRef,
};
use crate::synth::classify::{DependencyKind, classify};
use crate::synth::defaults::default_literal;

/// Baseline import set of every generated file.
const BASELINE_USINGS: &[&str] = &[
    "System",
    "System.Linq",
    "System.Collections.Generic",
    "NUnit.Framework",
    "Moq",
];

const FIXTURE_ATTRIBUTE: &str = "TestClass";
const SETUP_ATTRIBUTE: &str = "SetUp";
const TEST_ATTRIBUTE: &str = "Test";

const ASSERT_THAT: &str = "Assert.That(actual, Is.EqualTo(expected));";
const ASSERT_FAIL: &str = "Assert.Fail(\"autogenerated\");";

/// Synthesize the test skeleton for one class.
pub fn synthesize(class: &ClassModel) -> GeneratedTestClass {
    let fixture_name = format!("{}Tests", class.name);
    let instance = decapitalize(&class.name);

    let file = TestFile {
        usings: usings(class),
        namespace: format!("{}.Test", class.name),
        fixture: TestFixture {
            attribute: FIXTURE_ATTRIBUTE.to_string(),
            name: fixture_name.clone(),
            fields: fields(class, &instance),
            routines: routines(class, &instance),
        },
    };

    GeneratedTestClass::new(format!("{fixture_name}.cs"), emit::render(&file))
}

/// Deduplicated union of the baseline set and the source class's namespace.
fn usings(class: &ClassModel) -> Vec<String> {
    let mut usings: Vec<String> = BASELINE_USINGS.iter().map(|u| u.to_string()).collect();
    if !class.namespace.is_empty() && !usings.iter().any(|u| *u == class.namespace) {
        usings.push(class.namespace.clone());
    }
    usings
}

/// The instance-under-test field plus one mock field per mock-classified
/// constructor parameter.
fn fields(class: &ClassModel, instance: &str) -> Vec<FieldDecl> {
    let mut fields = vec![FieldDecl {
        ty: class.name.clone(),
        name: instance.to_string(),
    }];
    if let Some(ctor) = &class.constructor {
        for param in &ctor.parameters {
            if classify(&param.ty) == DependencyKind::Mock {
                fields.push(FieldDecl {
                    ty: format!("Mock<{}>", param.ty.name),
                    name: mock_name(&param.ty),
                });
            }
        }
    }
    fields
}

fn routines(class: &ClassModel, instance: &str) -> Vec<RoutineDecl> {
    let mut routines = Vec::new();

    if let Some(ctor) = &class.constructor {
        if !class.is_static {
            routines.push(setup_routine(class, ctor.parameters.as_slice(), instance));
        }
    }
    for method in &class.public_methods {
        routines.push(test_routine(method, instance));
    }
    routines
}

/// The `SetUp` routine: arrange every constructor argument, then construct
/// the instance under test.
fn setup_routine(class: &ClassModel, params: &[Parameter], instance: &str) -> RoutineDecl {
    let (mut statements, args) = arrange(params);
    statements.push(format!(
        "{instance} = new {}({});",
        class.name,
        args.join(", ")
    ));
    RoutineDecl {
        attribute: SETUP_ATTRIBUTE.to_string(),
        name: "SetUp".to_string(),
        statements,
    }
}

/// One stub test per public method: arrange, act, assert placeholders, and
/// the mandatory failing assertion so a fresh skeleton never silently passes.
fn test_routine(method: &MethodSignature, instance: &str) -> RoutineDecl {
    let (mut statements, args) = arrange(&method.parameters);
    let invocation = format!("{instance}.{}({})", method.name, args.join(", "));

    match &method.return_type {
        ReturnType::Void => {
            statements.push(format!("{invocation};"));
        }
        ReturnType::Type(ty) => {
            statements.push(format!("{} actual = {invocation};", ty.name));
            statements.push(format!("{} expected = {};", ty.name, default_literal(ty)));
            statements.push(ASSERT_THAT.to_string());
        }
    }
    statements.push(ASSERT_FAIL.to_string());

    RoutineDecl {
        attribute: TEST_ATTRIBUTE.to_string(),
        name: format!("{}Test", method.name),
        statements,
    }
}

/// Arrangement statements for a parameter list, in declaration order, plus
/// the argument names to pass on.
///
/// Value-classified parameters become local declarations initialized with
/// their default literal; mock-classified parameters become test-double
/// constructions assigned to the type-derived name; for constructor
/// parameters that is the mock field the fixture declares.
fn arrange(params: &[Parameter]) -> (Vec<String>, Vec<String>) {
    let mut statements = Vec::new();
    let mut args = Vec::new();
    for param in params {
        match classify(&param.ty) {
            DependencyKind::Mock => {
                let name = mock_name(&param.ty);
                statements.push(format!("{name} = new Mock<{}>();", param.ty.name));
                args.push(name);
            }
            DependencyKind::Value => {
                let name = param.name.clone();
                statements.push(format!(
                    "{} {name} = {};",
                    param.ty.name,
                    default_literal(&param.ty)
                ));
                args.push(name);
            }
        }
    }
    (statements, args)
}

/// Mock identifier: strip the abstraction marker and decapitalize
/// (`IDisposable` → `disposable`). Generic and array suffixes are never part
/// of the identifier.
fn mock_name(ty: &TypeRef) -> String {
    let simple = ty.simple_name();
    match simple.strip_prefix('I') {
        Some(rest) if rest.chars().next().is_some_and(char::is_uppercase) => decapitalize(rest),
        _ => decapitalize(simple),
    }
}

/// Lowercase the first character (`ClassForTest1` → `classForTest1`).
fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

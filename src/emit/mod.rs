//! Code Emitter: renders a test-file description to canonical C# text.
//!
//! The synthesizer builds a [`TestFile`] description; `render` turns it into
//! whitespace-normalized source: 4-space indentation, Allman braces, one
//! blank line between members, one trailing newline. Rendering is a pure
//! function of the description, so identical descriptions always produce
//! byte-identical text.

pub mod writer;

use writer::CsWriter;

/// One generated file: usings, a namespace, and the test fixture inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    pub usings: Vec<String>,
    pub namespace: String,
    pub fixture: TestFixture,
}

/// The test class itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFixture {
    /// Class-level marker attribute (`TestClass`)
    pub attribute: String,
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub routines: Vec<RoutineDecl>,
}

/// A private instance field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub ty: String,
    pub name: String,
}

/// A public void routine with a marker attribute (`SetUp` or `Test`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineDecl {
    pub attribute: String,
    pub name: String,
    pub statements: Vec<String>,
}

/// Render a test file description to source text.
pub fn render(file: &TestFile) -> String {
    let mut w = CsWriter::new();

    for using in &file.usings {
        w.writeln(&format!("using {using};"));
    }
    if !file.usings.is_empty() {
        w.newline();
    }

    w.writeln(&format!("namespace {}", file.namespace));
    w.open_block();

    w.writeln(&format!("[{}]", file.fixture.attribute));
    w.writeln(&format!("public class {}", file.fixture.name));
    w.open_block();

    let mut wrote_member = false;
    for field in &file.fixture.fields {
        w.writeln(&format!("private {} {};", field.ty, field.name));
        wrote_member = true;
    }

    for routine in &file.fixture.routines {
        if wrote_member {
            w.newline();
        }
        wrote_member = true;
        w.writeln(&format!("[{}]", routine.attribute));
        w.writeln(&format!("public void {}()", routine.name));
        w.open_block();
        for statement in &routine.statements {
            w.writeln(statement);
        }
        w.close_block();
    }

    w.close_block();
    w.close_block();
    w.finish()
}

//! IR → TypeScript emission
//!
//! Output layout, each section separated by one blank line:
//! 1. header comment (optional)
//! 2. prelude: non-exported aliases that give Rust container names a TypeScript meaning (optional)
//! 3. one exported declaration per [`TsDecl`], with JSDoc from Rust doc comments (optional)

mod writer;

pub use writer::CodeWriter;

use crate::backend::config::CodegenConfig;
use crate::backend::ir::{TsDecl, TsDeclKind, TsField};

/// First line of every generated file (unless disabled)
pub const HEADER: &str = "// This file is generated by typester. Do not edit it by hand.";

/// TypeScript equivalents of the Rust containers that lowering leaves by name.
pub const PRELUDE: &[&str] = &[
    "type HashSet<T extends number | string> = Record<T, undefined>;",
    "type HashMap<T extends number | string, U> = Record<T, U>;",
    "type Vec<T> = Array<T>;",
    "type Option<T> = T | undefined;",
    "type Result<T, U> = T | U;",
];

/// Emit a complete file for `decls` under `config`.
pub fn emit(decls: &[TsDecl], config: &CodegenConfig) -> String {
    TsEmitter::new(config).emit(decls)
}

/// Renders declarations as TypeScript source text.
pub struct TsEmitter<'a> {
    config: &'a CodegenConfig,
}

impl<'a> TsEmitter<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    /// Emit a complete file.
    #[tracing::instrument(skip_all, fields(decl_count = decls.len()))]
    pub fn emit(&self, decls: &[TsDecl]) -> String {
        let mut sections = Vec::with_capacity(decls.len() + 2);
        if self.config.header {
            sections.push(format!("{HEADER}\n"));
        }
        if self.config.prelude {
            sections.push(PRELUDE.iter().map(|line| format!("{line}\n")).collect::<String>());
        }
        sections.extend(decls.iter().map(|decl| self.emit_decl(decl)));
        sections.join("\n")
    }

    /// Emit a single declaration, including its trailing newline.
    pub fn emit_decl(&self, decl: &TsDecl) -> String {
        let mut w = CodeWriter::new(self.config.indent_width);
        self.write_docs(&mut w, decl.docs.as_deref());

        let head = decl.head();
        match &decl.kind {
            TsDeclKind::Alias(ty) => w.line(format!("export type {head} = {ty};")),
            TsDeclKind::Interface(fields) => {
                w.block(&format!("export interface {head}"), fields, |w, field| self.write_field(w, field));
            }
            TsDeclKind::Union(members) => w.union(&format!("export type {head}"), members),
        }
        w.finish()
    }

    fn write_field(&self, w: &mut CodeWriter, field: &TsField) {
        self.write_docs(w, field.docs.as_deref());
        w.line(format!("{field};"));
    }

    fn write_docs(&self, w: &mut CodeWriter, docs: Option<&str>) {
        if let Some(docs) = docs.filter(|_| self.config.docs) {
            w.jsdoc(docs);
        }
    }
}

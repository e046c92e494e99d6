//! Rust item → IR lowering
//!
//! Walks the items of a parsed file and produces one [`TsDecl`] per type alias, struct and enum. Items without a
//! TypeScript counterpart (functions, impls, traits, ...) are skipped. Inline modules are flattened into the same
//! output, so every declaration name must be unique across the whole file.
//!
//! ## Module Organization
//!
//! - `decl.rs` - aliases, structs and enums (serde representations)
//! - `types.rs` - `syn::Type` to `TsType`
//! - `errors.rs` - `LoweringErrors`

mod decl;
pub mod errors;
pub mod types;

use std::collections::HashMap;

use syn::ext::IdentExt;
use syn::{Attribute, Item, Visibility};

pub use errors::LoweringErrors;

use crate::backend::config::CodegenConfig;
use crate::backend::ir::TsDecl;
use crate::frontend::attrs;
use crate::frontend::diagnostics::{self, CompileError, Span};

/// Lower every convertible item of `file`.
///
/// ## Errors
///
/// Returns every error found in the file; lowering does not stop at the first failing item.
pub fn lower_file(file: &syn::File, config: &CodegenConfig) -> Result<Vec<TsDecl>, LoweringErrors> {
    TypeLowering::new(config).lower_file(file)
}

/// Lowering state for a single file.
pub struct TypeLowering<'a> {
    config: &'a CodegenConfig,
    decls: Vec<TsDecl>,
    /// First declaration span per name
    declared: HashMap<String, Span>,
    errors: Vec<CompileError>,
}

impl<'a> TypeLowering<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self {
            config,
            decls: Vec::new(),
            declared: HashMap::new(),
            errors: Vec::new(),
        }
    }

    #[tracing::instrument(skip_all, fields(item_count = file.items.len()))]
    pub fn lower_file(mut self, file: &syn::File) -> Result<Vec<TsDecl>, LoweringErrors> {
        self.lower_items(&file.items);

        match LoweringErrors::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => {
                tracing::debug!(decl_count = self.decls.len(), "lowered file");
                Ok(self.decls)
            }
        }
    }

    fn lower_items(&mut self, items: &[Item]) {
        for item in items {
            if let Some((item_attrs, vis)) = item_meta(item) {
                if attrs::is_cfg_test(item_attrs) || (self.config.public_only && !is_public(vis)) {
                    continue;
                }
            }

            match item {
                Item::Type(alias) => {
                    if self.declare(&alias.ident) {
                        let result = self.lower_alias(alias);
                        self.record(result);
                    }
                }
                Item::Struct(item_struct) => {
                    if self.declare(&item_struct.ident) {
                        let result = self.lower_struct(item_struct);
                        self.record(result);
                    }
                }
                Item::Enum(item_enum) => {
                    if self.declare(&item_enum.ident) {
                        let result = self.lower_enum(item_enum);
                        self.record(result);
                    }
                }
                Item::Mod(module) => {
                    if let Some((_, items)) = &module.content {
                        self.lower_items(items);
                    }
                }
                Item::Use(_) => {}
                other => {
                    tracing::debug!(kind = item_kind(other), "skipping item with no TypeScript counterpart");
                }
            }
        }
    }

    /// Claim a declaration name. Returns `false` (and records an error) if it was already taken.
    fn declare(&mut self, ident: &syn::Ident) -> bool {
        let name = ident.unraw().to_string();
        let span = Span::from_proc_macro(ident.span());
        if let Some(first) = self.declared.get(&name) {
            self.errors
                .push(diagnostics::errors::duplicate_declaration(&name, span, *first));
            return false;
        }
        self.declared.insert(name, span);
        true
    }

    fn record(&mut self, result: Result<TsDecl, CompileError>) {
        match result {
            Ok(decl) => self.decls.push(decl),
            Err(err) => self.errors.push(err),
        }
    }
}

fn item_meta(item: &Item) -> Option<(&[Attribute], &Visibility)> {
    match item {
        Item::Type(i) => Some((i.attrs.as_slice(), &i.vis)),
        Item::Struct(i) => Some((i.attrs.as_slice(), &i.vis)),
        Item::Enum(i) => Some((i.attrs.as_slice(), &i.vis)),
        Item::Mod(i) => Some((i.attrs.as_slice(), &i.vis)),
        _ => None,
    }
}

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

fn item_kind(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "const",
        Item::ExternCrate(_) => "extern crate",
        Item::Fn(_) => "fn",
        Item::ForeignMod(_) => "extern block",
        Item::Impl(_) => "impl",
        Item::Macro(_) => "macro",
        Item::Static(_) => "static",
        Item::Trait(_) => "trait",
        Item::TraitAlias(_) => "trait alias",
        Item::Union(_) => "union",
        _ => "other",
    }
}

//! C translation-unit tree
//!
//! The analyzer never parses C itself. Front ends (tree-sitter, or any
//! external tool emitting JSON) lower their syntax trees into these types,
//! and every analysis stage reads only from them.
//!
//! ## Shape
//! - `TranslationUnit` → `ExternalDecl` (function definitions, declarations)
//! - `Stmt` / `Expr` cover the statement and expression forms the analyzer
//!   distinguishes; anything else is kept as `Opaque` with its source text
//!   and lowered operands, so nested calls are never lost.
//!
//! All enums are internally tagged (`"kind"`) for the JSON front end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source line (1-based)
pub type Line = u32;

// ═══════════════════════════════════════════════════════════════════════════
// Top level
// ═══════════════════════════════════════════════════════════════════════════

/// One C translation unit, already macro-expanded
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Originating file (informational)
    #[serde(default)]
    pub file_path: String,
    pub items: Vec<ExternalDecl>,
}

impl TranslationUnit {
    pub fn new(file_path: impl Into<String>, items: Vec<ExternalDecl>) -> Self {
        Self {
            file_path: file_path.into(),
            items,
        }
    }

    /// Function definitions in source order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.items.iter().filter_map(|item| match item {
            ExternalDecl::Function(func) => Some(func),
            ExternalDecl::Declaration(_) => None,
        })
    }

    /// File-scope declarations in source order
    pub fn declarations(&self) -> impl Iterator<Item = &Decl> {
        self.items.iter().filter_map(|item| match item {
            ExternalDecl::Declaration(decl) => Some(decl),
            ExternalDecl::Function(_) => None,
        })
    }

    /// Find a function definition by name
    pub fn find_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions().find(|f| f.name == name)
    }
}

/// File-scope item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExternalDecl {
    Function(FunctionDef),
    Declaration(Decl),
}

/// Function definition with its body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub return_type: CType,
    #[serde(default)]
    pub params: Vec<Decl>,
    pub body: Vec<Stmt>,
    pub line: Line,
}

/// Named declaration (variable, parameter, prototype)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decl {
    pub name: String,
    pub ty: CType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<Initializer>,
    pub line: Line,
}

impl Decl {
    pub fn new(name: impl Into<String>, ty: CType, line: Line) -> Self {
        Self {
            name: name.into(),
            ty,
            init: None,
            line,
        }
    }

    pub fn with_init(mut self, init: Initializer) -> Self {
        self.init = Some(init);
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════════════════════

/// Declared C type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CType {
    /// Type specifier words without qualifiers (`unsigned long`, `uint32_t`)
    Named { names: Vec<String> },
    /// `struct`/`union`/`enum` specifier
    Tagged {
        keyword: String,
        #[serde(default)]
        name: Option<String>,
    },
    Pointer { pointee: Box<CType> },
    Array {
        element: Box<CType>,
        #[serde(default)]
        size: Option<Box<Expr>>,
    },
    Function { returns: Box<CType> },
}

impl CType {
    /// Single-word named type
    pub fn named(name: impl Into<String>) -> Self {
        CType::Named {
            names: vec![name.into()],
        }
    }

    pub fn pointer_to(pointee: CType) -> Self {
        CType::Pointer {
            pointee: Box::new(pointee),
        }
    }

    pub fn array_of(element: CType, size: Option<Expr>) -> Self {
        CType::Array {
            element: Box::new(element),
            size: size.map(Box::new),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Initializers
// ═══════════════════════════════════════════════════════════════════════════

/// Declaration initializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Initializer {
    Expr { expr: Expr },
    List { entries: Vec<InitEntry> },
}

/// One entry of a brace-enclosed initializer list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitEntry {
    /// Empty for positional entries
    #[serde(default)]
    pub designators: Vec<Designator>,
    pub value: Initializer,
}

impl InitEntry {
    /// Name of the first `.field` designator, if the entry starts with one
    pub fn field_name(&self) -> Option<&str> {
        match self.designators.first() {
            Some(Designator::Field { name }) => Some(name.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Designator {
    /// `.name`
    Field { name: String },
    /// `[index]`
    Index { index: Expr },
}

// ═══════════════════════════════════════════════════════════════════════════
// Statements
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    Expr {
        expr: Expr,
    },
    Decl {
        decls: Vec<Decl>,
    },
    Compound {
        items: Vec<Stmt>,
    },
    If {
        cond: Expr,
        then: Box<Stmt>,
        #[serde(default)]
        otherwise: Option<Box<Stmt>>,
    },
    For {
        #[serde(default)]
        init: Option<Box<Stmt>>,
        #[serde(default)]
        cond: Option<Expr>,
        #[serde(default)]
        step: Option<Expr>,
        body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },
    Switch {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// `case value:` / `default:` with the statements that follow the label
    Case {
        #[serde(default)]
        value: Option<Expr>,
        body: Vec<Stmt>,
    },
    Return {
        #[serde(default)]
        value: Option<Expr>,
    },
    Labeled {
        label: String,
        body: Box<Stmt>,
    },
    Goto {
        label: String,
    },
    Break,
    Continue,
    Empty,
}

// ═══════════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════════

/// Member-access operator; doubles as the type tag of struct-field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberOp {
    #[serde(rename = "->")]
    Arrow,
    #[serde(rename = ".")]
    Dot,
}

impl MemberOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberOp::Arrow => "->",
            MemberOp::Dot => ".",
        }
    }
}

/// Function call with its source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    /// Source text of each argument, as written (empty when built in memory)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arg_texts: Vec<String>,
    pub line: Line,
}

impl CallExpr {
    pub fn new(callee: impl Into<String>, args: Vec<Expr>, line: Line) -> Self {
        Self {
            callee: Box::new(Expr::ident(callee)),
            args,
            arg_texts: Vec::new(),
            line,
        }
    }

    /// Argument `index` as written in the source, or rendered from the tree
    /// when no source text was kept
    pub fn arg_text(&self, index: usize) -> Option<String> {
        match self.arg_texts.get(index) {
            Some(text) => Some(text.clone()),
            None => self.args.get(index).map(|arg| arg.to_string()),
        }
    }

    /// Callee name when the call is through a plain identifier
    pub fn callee_name(&self) -> Option<&str> {
        match self.callee.as_ref() {
            Expr::Identifier { name } => Some(name.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Identifier {
        name: String,
    },
    /// Numeric, character, string and boolean literals, as written
    Constant {
        value: String,
    },
    Call(CallExpr),
    /// Prefix (`&x`, `*p`, `-x`, `!x`, `sizeof x`, `++x`) or postfix (`x++`)
    Unary {
        op: String,
        operand: Box<Expr>,
        #[serde(default)]
        postfix: bool,
    },
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Assign {
        op: String,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `base->field` / `base.field`
    Member {
        base: Box<Expr>,
        op: MemberOp,
        field: String,
    },
    /// `base[index]`
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    Cast {
        ty: CType,
        expr: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Comma {
        exprs: Vec<Expr>,
    },
    SizeofType {
        ty: CType,
    },
    /// Construct the analyzer does not model; operands keep nested calls reachable
    Opaque {
        text: String,
        #[serde(default)]
        operands: Vec<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn constant(value: impl Into<String>) -> Self {
        Expr::Constant {
            value: value.into(),
        }
    }

    pub fn address_of(operand: Expr) -> Self {
        Expr::unary("&", operand)
    }

    pub fn unary(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary {
            op: op.into(),
            operand: Box::new(operand),
            postfix: false,
        }
    }

    pub fn member(base: Expr, op: MemberOp, field: impl Into<String>) -> Self {
        Expr::Member {
            base: Box::new(base),
            op,
            field: field.into(),
        }
    }

    pub fn index(base: Expr, index: Expr) -> Self {
        Expr::Index {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>, line: Line) -> Self {
        Expr::Call(CallExpr::new(callee, args, line))
    }

    /// Identifier name, if this is a bare identifier
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expr::Identifier { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Operand of `&operand`
    pub fn as_address_of(&self) -> Option<&Expr> {
        match self {
            Expr::Unary {
                op,
                operand,
                postfix: false,
            } if op == "&" => Some(operand),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Textual rendering
// ═══════════════════════════════════════════════════════════════════════════
//
// C-like text used in diagnostics and by the loop-containment heuristic.
// Not guaranteed to re-parse.

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Named { names } => f.write_str(&names.join(" ")),
            CType::Tagged { keyword, name } => match name {
                Some(name) => write!(f, "{} {}", keyword, name),
                None => f.write_str(keyword),
            },
            CType::Pointer { pointee } => write!(f, "{} *", pointee),
            CType::Array { element, size } => match size {
                Some(size) => write!(f, "{}[{}]", element, size),
                None => write!(f, "{}[]", element),
            },
            CType::Function { returns } => write!(f, "{} ()", returns),
        }
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(init) = &self.init {
            write!(f, " = {}", init)?;
        }
        Ok(())
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Initializer::Expr { expr } => write!(f, "{}", expr),
            Initializer::List { entries } => {
                f.write_str("{")?;
                write_joined(f, entries, ", ")?;
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for InitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for designator in &self.designators {
            match designator {
                Designator::Field { name } => write!(f, ".{}", name)?,
                Designator::Index { index } => write!(f, "[{}]", index)?,
            }
        }
        if !self.designators.is_empty() {
            f.write_str(" = ")?;
        }
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        write_joined(f, &self.args, ", ")?;
        f.write_str(")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier { name } => f.write_str(name),
            Expr::Constant { value } => f.write_str(value),
            Expr::Call(call) => write!(f, "{}", call),
            Expr::Unary {
                op,
                operand,
                postfix,
            } => {
                if *postfix {
                    write!(f, "{}{}", operand, op)
                } else if op == "sizeof" {
                    write!(f, "sizeof({})", operand)
                } else {
                    write!(f, "{}{}", op, operand)
                }
            }
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::Assign { op, target, value } => write!(f, "{} {} {}", target, op, value),
            Expr::Member { base, op, field } => write!(f, "{}{}{}", base, op.as_str(), field),
            Expr::Index { base, index } => write!(f, "{}[{}]", base, index),
            Expr::Cast { ty, expr } => write!(f, "({}){}", ty, expr),
            Expr::Conditional {
                cond,
                then,
                otherwise,
            } => write!(f, "({} ? {} : {})", cond, then, otherwise),
            Expr::Comma { exprs } => write_joined(f, exprs, ", "),
            Expr::SizeofType { ty } => write!(f, "sizeof({})", ty),
            Expr::Opaque { text, .. } => f.write_str(text),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr { expr } => write!(f, "{};", expr),
            Stmt::Decl { decls } => {
                write_joined(f, decls, "; ")?;
                f.write_str(";")
            }
            Stmt::Compound { items } => {
                f.write_str("{ ")?;
                for item in items {
                    write!(f, "{} ", item)?;
                }
                f.write_str("}")
            }
            Stmt::If {
                cond,
                then,
                otherwise,
            } => {
                write!(f, "if ({}) {}", cond, then)?;
                if let Some(otherwise) = otherwise {
                    write!(f, " else {}", otherwise)?;
                }
                Ok(())
            }
            Stmt::For {
                init,
                cond,
                step,
                body,
            } => {
                f.write_str("for (")?;
                match init {
                    Some(init) => write!(f, "{} ", init)?,
                    None => f.write_str("; ")?,
                }
                if let Some(cond) = cond {
                    write!(f, "{}", cond)?;
                }
                f.write_str("; ")?;
                if let Some(step) = step {
                    write!(f, "{}", step)?;
                }
                write!(f, ") {}", body)
            }
            Stmt::While { cond, body } => write!(f, "while ({}) {}", cond, body),
            Stmt::DoWhile { body, cond } => write!(f, "do {} while ({});", body, cond),
            Stmt::Switch { cond, body } => write!(f, "switch ({}) {}", cond, body),
            Stmt::Case { value, body } => {
                match value {
                    Some(value) => write!(f, "case {}:", value)?,
                    None => f.write_str("default:")?,
                }
                for stmt in body {
                    write!(f, " {}", stmt)?;
                }
                Ok(())
            }
            Stmt::Return { value } => match value {
                Some(value) => write!(f, "return {};", value),
                None => f.write_str("return;"),
            },
            Stmt::Labeled { label, body } => write!(f, "{}: {}", label, body),
            Stmt::Goto { label } => write!(f, "goto {};", label),
            Stmt::Break => f.write_str("break;"),
            Stmt::Continue => f.write_str("continue;"),
            Stmt::Empty => f.write_str(";"),
        }
    }
}

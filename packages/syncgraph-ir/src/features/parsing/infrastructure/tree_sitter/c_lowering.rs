//! tree-sitter-c → `c_ast` lowering
//!
//! Walks the concrete syntax tree produced by `tree-sitter-c` and builds the
//! analyzer's C tree. Node kinds and field names follow the tree-sitter-c
//! grammar. Expressions the tree does not model become `Expr::Opaque` with
//! their text and lowered operands; unnamed declarations and preprocessor
//! directives are dropped.

use tracing::warn;
use tree_sitter::Node as TSNode;

use crate::shared::models::{
    CType, CallExpr, Decl, Designator, Expr, ExternalDecl, FunctionDef, InitEntry, Initializer,
    Line, MemberOp, Stmt,
};

/// 1-based line of a node
pub fn line_of(node: &TSNode) -> Line {
    node.start_position().row as Line + 1
}

/// Lowering context over one source text
pub struct CLowering<'s> {
    source: &'s str,
}

impl<'s> CLowering<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: &TSNode) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    fn named_children<'t>(&self, node: &TSNode<'t>) -> Vec<TSNode<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|c| !c.is_extra())
            .collect()
    }

    fn field_children<'t>(&self, node: &TSNode<'t>, field: &str) -> Vec<TSNode<'t>> {
        let mut cursor = node.walk();
        node.children_by_field_name(field, &mut cursor).collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Top level
    // ═══════════════════════════════════════════════════════════════════════

    /// Lower every item of a `translation_unit`
    pub fn lower_unit(&self, root: &TSNode) -> Vec<ExternalDecl> {
        let mut items = Vec::new();
        self.lower_items(root, &mut items);
        items
    }

    fn lower_items(&self, node: &TSNode, items: &mut Vec<ExternalDecl>) {
        for child in self.named_children(node) {
            match child.kind() {
                "function_definition" => {
                    if let Some(func) = self.lower_function(&child) {
                        items.push(ExternalDecl::Function(func));
                    }
                }
                "declaration" => {
                    items.extend(
                        self.lower_declaration(&child)
                            .into_iter()
                            .map(ExternalDecl::Declaration),
                    );
                }
                // Conditional blocks keep their items; the condition is not evaluated
                "preproc_if" | "preproc_ifdef" | "preproc_else" | "preproc_elif"
                | "preproc_elifdef" | "linkage_specification" | "declaration_list" => {
                    self.lower_items(&child, items)
                }
                _ => {}
            }
        }
    }

    fn lower_function(&self, node: &TSNode) -> Option<FunctionDef> {
        let base = node
            .child_by_field_name("type")
            .map(|t| self.lower_type_specifier(&t))
            .unwrap_or_else(|| CType::named("int"));

        // Return pointers wrap the function declarator
        let mut return_type = base;
        let mut declarator = node.child_by_field_name("declarator")?;
        loop {
            match declarator.kind() {
                "pointer_declarator" => {
                    return_type = CType::pointer_to(return_type);
                    declarator = declarator.child_by_field_name("declarator")?;
                }
                "parenthesized_declarator" | "attributed_declarator" => {
                    declarator = declarator.named_child(0)?;
                }
                "function_declarator" => break,
                other => {
                    warn!(line = line_of(node), kind = other, "function without declarator");
                    return None;
                }
            }
        }

        let name_node = declarator.child_by_field_name("declarator")?;
        let name = self.declarator_name(&name_node)?;

        let params = declarator
            .child_by_field_name("parameters")
            .map(|list| self.lower_parameters(&list))
            .unwrap_or_default();

        let body = node
            .child_by_field_name("body")
            .map(|b| self.lower_block(&b))
            .unwrap_or_default();

        Some(FunctionDef {
            name,
            return_type,
            params,
            body,
            line: line_of(node),
        })
    }

    fn lower_parameters(&self, list: &TSNode) -> Vec<Decl> {
        self.named_children(list)
            .iter()
            .filter(|p| p.kind() == "parameter_declaration")
            .filter_map(|p| {
                let base = self.lower_type_specifier(&p.child_by_field_name("type")?);
                let declarator = p.child_by_field_name("declarator")?;
                self.lower_declarator(&declarator, base, line_of(p))
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Declarations and types
    // ═══════════════════════════════════════════════════════════════════════

    /// One `Decl` per declarator of a `declaration`
    pub fn lower_declaration(&self, node: &TSNode) -> Vec<Decl> {
        let base = match node.child_by_field_name("type") {
            Some(t) => self.lower_type_specifier(&t),
            None => return Vec::new(),
        };
        self.field_children(node, "declarator")
            .iter()
            .filter_map(|d| self.lower_declarator(d, base.clone(), line_of(d)))
            .collect()
    }

    fn lower_declarator(&self, node: &TSNode, ty: CType, line: Line) -> Option<Decl> {
        match node.kind() {
            "identifier" | "field_identifier" | "type_identifier" => {
                Some(Decl::new(self.text(node), ty, line))
            }
            "init_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                let decl = self.lower_declarator(&inner, ty, line)?;
                match node.child_by_field_name("value") {
                    Some(value) => Some(decl.with_init(self.lower_initializer(&value))),
                    None => Some(decl),
                }
            }
            "pointer_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                self.lower_declarator(&inner, CType::pointer_to(ty), line)
            }
            "array_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                let size = node
                    .child_by_field_name("size")
                    .map(|s| self.lower_expr(&s));
                self.lower_declarator(&inner, CType::array_of(ty, size), line)
            }
            "function_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                let ty = CType::Function {
                    returns: Box::new(ty),
                };
                self.lower_declarator(&inner, ty, line)
            }
            "parenthesized_declarator" | "attributed_declarator" => {
                let inner = node.named_child(0)?;
                self.lower_declarator(&inner, ty, line)
            }
            _ => None,
        }
    }

    fn declarator_name(&self, node: &TSNode) -> Option<String> {
        match node.kind() {
            "identifier" | "field_identifier" => Some(self.text(node).to_string()),
            "pointer_declarator" | "array_declarator" | "function_declarator" => {
                self.declarator_name(&node.child_by_field_name("declarator")?)
            }
            "parenthesized_declarator" | "attributed_declarator" => {
                self.declarator_name(&node.named_child(0)?)
            }
            _ => None,
        }
    }

    /// Type specifier without qualifiers or storage class
    pub fn lower_type_specifier(&self, node: &TSNode) -> CType {
        match node.kind() {
            "sized_type_specifier" => {
                let mut cursor = node.walk();
                let names = node
                    .children(&mut cursor)
                    .filter(|c| c.kind() != "type_qualifier" && !c.is_extra())
                    .map(|c| self.text(&c).to_string())
                    .collect();
                CType::Named { names }
            }
            "struct_specifier" | "union_specifier" | "enum_specifier" => CType::Tagged {
                keyword: node.kind().trim_end_matches("_specifier").to_string(),
                name: node
                    .child_by_field_name("name")
                    .map(|n| self.text(&n).to_string()),
            },
            _ => CType::named(self.text(node)),
        }
    }

    /// `type_descriptor` of casts and `sizeof(type)`
    fn lower_type_descriptor(&self, node: &TSNode) -> CType {
        let mut ty = node
            .child_by_field_name("type")
            .map(|t| self.lower_type_specifier(&t))
            .unwrap_or_else(|| CType::named(self.text(node)));

        let mut declarator = node.child_by_field_name("declarator");
        while let Some(d) = declarator {
            match d.kind() {
                "abstract_pointer_declarator" => ty = CType::pointer_to(ty),
                "abstract_array_declarator" => {
                    let size = d.child_by_field_name("size").map(|s| self.lower_expr(&s));
                    ty = CType::array_of(ty, size);
                }
                "abstract_function_declarator" => {
                    ty = CType::Function {
                        returns: Box::new(ty),
                    }
                }
                _ => {}
            }
            declarator = d.child_by_field_name("declarator");
        }
        ty
    }

    fn lower_initializer(&self, node: &TSNode) -> Initializer {
        if node.kind() != "initializer_list" {
            return Initializer::Expr {
                expr: self.lower_expr(node),
            };
        }

        let entries = self
            .named_children(node)
            .iter()
            .map(|entry| {
                if entry.kind() != "initializer_pair" {
                    return InitEntry {
                        designators: Vec::new(),
                        value: self.lower_initializer(entry),
                    };
                }
                let designators = self
                    .field_children(entry, "designator")
                    .iter()
                    .filter_map(|d| self.lower_designator(d))
                    .collect();
                let value = match entry.child_by_field_name("value") {
                    Some(value) => self.lower_initializer(&value),
                    None => Initializer::Expr {
                        expr: self.opaque(entry),
                    },
                };
                InitEntry { designators, value }
            })
            .collect();
        Initializer::List { entries }
    }

    fn lower_designator(&self, node: &TSNode) -> Option<Designator> {
        match node.kind() {
            "field_designator" => Some(Designator::Field {
                name: self.text(&node.named_child(0)?).to_string(),
            }),
            "subscript_designator" => Some(Designator::Index {
                index: self.lower_expr(&node.named_child(0)?),
            }),
            // GNU `name: value`
            "field_identifier" => Some(Designator::Field {
                name: self.text(node).to_string(),
            }),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Statements
    // ═══════════════════════════════════════════════════════════════════════

    /// Statements of a `compound_statement`
    fn lower_block(&self, node: &TSNode) -> Vec<Stmt> {
        self.named_children(node)
            .iter()
            .filter_map(|s| self.lower_stmt(s))
            .collect()
    }

    fn boxed_stmt(&self, node: Option<TSNode>) -> Box<Stmt> {
        Box::new(
            node.and_then(|n| self.lower_stmt(&n))
                .unwrap_or(Stmt::Empty),
        )
    }

    /// `None` for nodes that carry no statement (directives, comments)
    fn lower_stmt(&self, node: &TSNode) -> Option<Stmt> {
        let stmt = match node.kind() {
            "compound_statement" => Stmt::Compound {
                items: self.lower_block(node),
            },
            "expression_statement" => match node.named_child(0) {
                Some(expr) => Stmt::Expr {
                    expr: self.lower_expr(&expr),
                },
                None => Stmt::Empty,
            },
            "declaration" => Stmt::Decl {
                decls: self.lower_declaration(node),
            },
            "if_statement" => Stmt::If {
                cond: self.lower_field_expr(node, "condition"),
                then: self.boxed_stmt(node.child_by_field_name("consequence")),
                otherwise: node.child_by_field_name("alternative").map(|alt| {
                    // Newer grammars wrap the branch in `else_clause`
                    let branch = if alt.kind() == "else_clause" {
                        alt.named_child(0)
                    } else {
                        Some(alt)
                    };
                    self.boxed_stmt(branch)
                }),
            },
            "for_statement" => Stmt::For {
                init: node.child_by_field_name("initializer").map(|init| {
                    Box::new(if init.kind() == "declaration" {
                        Stmt::Decl {
                            decls: self.lower_declaration(&init),
                        }
                    } else {
                        Stmt::Expr {
                            expr: self.lower_expr(&init),
                        }
                    })
                }),
                cond: node
                    .child_by_field_name("condition")
                    .map(|c| self.lower_expr(&c)),
                step: node
                    .child_by_field_name("update")
                    .map(|u| self.lower_expr(&u)),
                body: self.boxed_stmt(node.child_by_field_name("body")),
            },
            "while_statement" => Stmt::While {
                cond: self.lower_field_expr(node, "condition"),
                body: self.boxed_stmt(node.child_by_field_name("body")),
            },
            "do_statement" => Stmt::DoWhile {
                body: self.boxed_stmt(node.child_by_field_name("body")),
                cond: self.lower_field_expr(node, "condition"),
            },
            "switch_statement" => Stmt::Switch {
                cond: self.lower_field_expr(node, "condition"),
                body: self.boxed_stmt(node.child_by_field_name("body")),
            },
            "case_statement" => {
                let value = node.child_by_field_name("value");
                let value_id = value.map(|v| v.id());
                Stmt::Case {
                    value: value.map(|v| self.lower_expr(&v)),
                    body: self
                        .named_children(node)
                        .iter()
                        .filter(|c| Some(c.id()) != value_id)
                        .filter_map(|c| self.lower_stmt(c))
                        .collect(),
                }
            }
            "return_statement" => Stmt::Return {
                value: node.named_child(0).map(|v| self.lower_expr(&v)),
            },
            "labeled_statement" => {
                let label = node.child_by_field_name("label");
                let label_id = label.map(|l| l.id());
                let body = self
                    .named_children(node)
                    .into_iter()
                    .find(|c| Some(c.id()) != label_id);
                Stmt::Labeled {
                    label: label.map(|l| self.text(&l).to_string()).unwrap_or_default(),
                    body: self.boxed_stmt(body),
                }
            }
            "goto_statement" => Stmt::Goto {
                label: node
                    .child_by_field_name("label")
                    .map(|l| self.text(&l).to_string())
                    .unwrap_or_default(),
            },
            "break_statement" => Stmt::Break,
            "continue_statement" => Stmt::Continue,
            "comment" | "type_definition" | "preproc_include" | "preproc_def"
            | "preproc_function_def" | "preproc_call" => return None,
            "preproc_if" | "preproc_ifdef" | "preproc_else" | "preproc_elif" => Stmt::Compound {
                items: self
                    .named_children(node)
                    .iter()
                    .filter(|c| {
                        !matches!(c.kind(), "identifier" | "preproc_defined")
                            && node.child_by_field_name("condition").map(|n| n.id()) != Some(c.id())
                    })
                    .filter_map(|c| self.lower_stmt(c))
                    .collect(),
            },
            _ => {
                if node.kind().ends_with("_expression") || node.kind() == "identifier" {
                    Stmt::Expr {
                        expr: self.lower_expr(node),
                    }
                } else {
                    Stmt::Expr {
                        expr: self.opaque(node),
                    }
                }
            }
        };
        Some(stmt)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Expressions
    // ═══════════════════════════════════════════════════════════════════════

    fn lower_field_expr(&self, node: &TSNode, field: &str) -> Expr {
        match node.child_by_field_name(field) {
            Some(child) => self.lower_expr(&child),
            None => self.opaque(node),
        }
    }

    fn boxed_field_expr(&self, node: &TSNode, field: &str) -> Box<Expr> {
        Box::new(self.lower_field_expr(node, field))
    }

    fn operator(&self, node: &TSNode) -> String {
        node.child_by_field_name("operator")
            .map(|op| self.text(&op).to_string())
            .unwrap_or_default()
    }

    /// Unmodeled construct: text plus lowered named children
    fn opaque(&self, node: &TSNode) -> Expr {
        Expr::Opaque {
            text: self.text(node).to_string(),
            operands: self
                .named_children(node)
                .iter()
                .filter(|c| !c.kind().ends_with("_identifier") && c.kind() != "type_descriptor")
                .map(|c| match c.kind() {
                    "compound_statement" => Expr::Opaque {
                        text: self.text(c).to_string(),
                        operands: self
                            .lower_block(c)
                            .into_iter()
                            .filter_map(|s| match s {
                                Stmt::Expr { expr } => Some(expr),
                                _ => None,
                            })
                            .collect(),
                    },
                    "initializer_list" => match self.lower_initializer(c) {
                        Initializer::Expr { expr } => expr,
                        Initializer::List { entries } => Expr::Opaque {
                            text: self.text(c).to_string(),
                            operands: entries
                                .into_iter()
                                .filter_map(|e| match e.value {
                                    Initializer::Expr { expr } => Some(expr),
                                    Initializer::List { .. } => None,
                                })
                                .collect(),
                        },
                    },
                    _ => self.lower_expr(c),
                })
                .collect(),
        }
    }

    pub fn lower_expr(&self, node: &TSNode) -> Expr {
        match node.kind() {
            "identifier" | "field_identifier" => Expr::ident(self.text(node)),
            "number_literal" | "char_literal" | "string_literal" | "concatenated_string"
            | "true" | "false" | "null" => Expr::constant(self.text(node)),
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) if inner.kind() != "compound_statement" => self.lower_expr(&inner),
                _ => self.opaque(node),
            },
            "call_expression" => {
                let arg_nodes = node
                    .child_by_field_name("arguments")
                    .map(|list| self.named_children(&list))
                    .unwrap_or_default();
                Expr::Call(CallExpr {
                    callee: self.boxed_field_expr(node, "function"),
                    args: arg_nodes.iter().map(|a| self.lower_expr(a)).collect(),
                    arg_texts: arg_nodes.iter().map(|a| self.text(a).to_string()).collect(),
                    line: line_of(node),
                })
            }
            "pointer_expression" | "unary_expression" => Expr::Unary {
                op: self.operator(node),
                operand: self.boxed_field_expr(node, "argument"),
                postfix: false,
            },
            "update_expression" => {
                let postfix = match (
                    node.child_by_field_name("argument"),
                    node.child_by_field_name("operator"),
                ) {
                    (Some(arg), Some(op)) => arg.start_byte() < op.start_byte(),
                    _ => false,
                };
                Expr::Unary {
                    op: self.operator(node),
                    operand: self.boxed_field_expr(node, "argument"),
                    postfix,
                }
            }
            "binary_expression" => Expr::Binary {
                op: self.operator(node),
                lhs: self.boxed_field_expr(node, "left"),
                rhs: self.boxed_field_expr(node, "right"),
            },
            "assignment_expression" => Expr::Assign {
                op: self.operator(node),
                target: self.boxed_field_expr(node, "left"),
                value: self.boxed_field_expr(node, "right"),
            },
            "field_expression" => {
                let op = match self.operator(node).as_str() {
                    "->" => MemberOp::Arrow,
                    "." => MemberOp::Dot,
                    _ => return self.opaque(node),
                };
                match node.child_by_field_name("field") {
                    Some(field) => Expr::member(
                        self.lower_field_expr(node, "argument"),
                        op,
                        self.text(&field),
                    ),
                    None => self.opaque(node),
                }
            }
            "subscript_expression" => Expr::index(
                self.lower_field_expr(node, "argument"),
                self.lower_field_expr(node, "index"),
            ),
            "cast_expression" => Expr::Cast {
                ty: node
                    .child_by_field_name("type")
                    .map(|t| self.lower_type_descriptor(&t))
                    .unwrap_or_else(|| CType::named("")),
                expr: self.boxed_field_expr(node, "value"),
            },
            "conditional_expression" => Expr::Conditional {
                cond: self.boxed_field_expr(node, "condition"),
                then: self.boxed_field_expr(node, "consequence"),
                otherwise: self.boxed_field_expr(node, "alternative"),
            },
            "comma_expression" => {
                let mut exprs = vec![self.lower_field_expr(node, "left")];
                match self.lower_field_expr(node, "right") {
                    Expr::Comma { exprs: rest } => exprs.extend(rest),
                    right => exprs.push(right),
                }
                Expr::Comma { exprs }
            }
            "sizeof_expression" => {
                if let Some(ty) = node.child_by_field_name("type") {
                    Expr::SizeofType {
                        ty: self.lower_type_descriptor(&ty),
                    }
                } else {
                    Expr::unary("sizeof", self.lower_field_expr(node, "value"))
                }
            }
            _ => self.opaque(node),
        }
    }
}

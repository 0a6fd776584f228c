//! Test data builders
//!
//! Builder patterns for C trees, used where writing C text would obscure
//! the shape under test.

use syncgraph_ir::shared::models::{
    CType, Decl, Expr, ExternalDecl, FunctionDef, Line, Stmt, TranslationUnit,
};

/// Builder for a TranslationUnit
#[derive(Debug, Default)]
pub struct UnitBuilder {
    items: Vec<ExternalDecl>,
}

impl UnitBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file-scope `int` variable
    pub fn with_global(mut self, name: &str) -> Self {
        let line = self.items.len() as Line + 1;
        self.items
            .push(ExternalDecl::Declaration(Decl::new(name, CType::named("int"), line)));
        self
    }

    /// Add a function definition
    pub fn with_function(mut self, function: FunctionBuilder) -> Self {
        self.items.push(ExternalDecl::Function(function.build()));
        self
    }

    /// Build the final TranslationUnit
    pub fn build(self) -> TranslationUnit {
        TranslationUnit::new("built.c", self.items)
    }
}

/// Builder for a FunctionDef whose calls get consecutive line numbers
#[derive(Debug)]
pub struct FunctionBuilder {
    name: String,
    body: Vec<Stmt>,
    next_line: Line,
}

impl FunctionBuilder {
    /// `first_line` is the line of the first statement
    pub fn new(name: &str, first_line: Line) -> Self {
        Self {
            name: name.to_string(),
            body: Vec::new(),
            next_line: first_line,
        }
    }

    fn line(&mut self) -> Line {
        let line = self.next_line;
        self.next_line += 1;
        line
    }

    /// Add an access call of `primitive` on `&variable`
    pub fn access(mut self, primitive: &str, variable: &str, intention: &str) -> Self {
        let shared = Expr::address_of(Expr::ident(variable));
        let local = Expr::address_of(Expr::ident("local"));
        let args = match primitive {
            "iAutoSyncRead" | "iAutoSyncReadToUpdate" => {
                vec![local, shared, Expr::constant("4"), Expr::ident(intention)]
            }
            _ => vec![shared, local, Expr::constant("4"), Expr::ident(intention)],
        };
        let line = self.line();
        self.body.push(Stmt::Expr {
            expr: Expr::call(primitive, args, line),
        });
        self
    }

    /// Add `pthread_create(&tid, NULL, &thread, NULL)`
    pub fn create(mut self, thread: &str) -> Self {
        let line = self.line();
        self.body.push(create_stmt(thread, line));
        self
    }

    /// Add `for (;;) { pthread_create(..., &thread, ...); }`
    pub fn create_in_loop(mut self, thread: &str) -> Self {
        let line = self.line();
        self.body.push(Stmt::For {
            init: None,
            cond: None,
            step: None,
            body: Box::new(Stmt::Compound {
                items: vec![create_stmt(thread, line)],
            }),
        });
        self
    }

    /// Build the final FunctionDef
    pub fn build(self) -> FunctionDef {
        FunctionDef {
            name: self.name,
            return_type: CType::pointer_to(CType::named("void")),
            params: vec![],
            body: self.body,
            line: 1,
        }
    }
}

fn create_stmt(thread: &str, line: Line) -> Stmt {
    Stmt::Expr {
        expr: Expr::call(
            "pthread_create",
            vec![
                Expr::address_of(Expr::ident("tid")),
                Expr::ident("NULL"),
                Expr::address_of(Expr::ident(thread)),
                Expr::ident("NULL"),
            ],
            line,
        ),
    }
}

/// `threads` workers each touching `vars_per_thread` variables with every
/// access primitive, all created from `main`
pub fn synthetic_unit(threads: usize, vars_per_thread: usize) -> TranslationUnit {
    let mut builder = UnitBuilder::new();
    for v in 0..threads * vars_per_thread {
        builder = builder.with_global(&format!("shared_{v}"));
    }

    let mut next_line: Line = 1_000;
    for t in 0..threads {
        let mut function = FunctionBuilder::new(&format!("Worker{t}"), next_line);
        for v in 0..vars_per_thread {
            let variable = format!("shared_{}", t * vars_per_thread + v);
            let intention = format!("xIntention{}", t * vars_per_thread + v);
            for primitive in [
                "iAutoSyncRead",
                "iAutoSyncReadToUpdate",
                "iAutoSyncUpdate",
                "iAutoSyncWrite",
            ] {
                function = function.access(primitive, &variable, &intention);
            }
        }
        next_line += (vars_per_thread as Line) * 4 + 10;
        builder = builder.with_function(function);
    }

    let mut main = FunctionBuilder::new("main", next_line);
    for t in 0..threads {
        main = if t % 2 == 0 {
            main.create(&format!("Worker{t}"))
        } else {
            main.create_in_loop(&format!("Worker{t}"))
        };
    }
    builder.with_function(main).build()
}

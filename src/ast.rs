use std::{mem, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, strings, booleans and `nil`. Tokens carry it as their
/// parsed literal, and the AST carries it inside [`Expr::Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double precision number literal such as `42` or `3.14`.
    Number(f64),
    /// A string literal, without its surrounding quotes.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its sub-expressions. Operator nodes remember
/// the line of their operator token so runtime errors can point at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line of the identifier token.
        line: usize,
    },
    /// Assignment to an existing variable (`name = value`).
    Assign {
        /// Name of the assigned variable.
        name:  String,
        /// The expression producing the new value.
        value: Box<Self>,
        /// Line of the identifier token.
        line:  usize,
    },
    /// A unary operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:    UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expression: Box<Self>,
    },
    /// Call expression (e.g. `clock()`).
    Call {
        /// Expression producing the callee.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Line of the closing parenthesis.
        line:      usize,
    },
}

/// A user-defined function declaration (`fun name(params) { body }`).
///
/// Declarations are shared through an `Rc` so that function values created at
/// runtime can keep their body alive after the statement list that declared
/// them is gone (for example between two prompt lines).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The statements of the function body.
    pub body:   Vec<Stmt>,
    /// Line of the function name.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
    /// A variable declaration using `var`.
    Var {
        /// The name of the variable.
        name:        String,
        /// The optional initial value; the variable is `nil` without one.
        initializer: Option<Expr>,
        /// Line of the variable name.
        line:        usize,
    },
    /// A braced block, executed in its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// `if (condition) then_branch else else_branch`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`. `for` loops are desugared into this.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// A function declaration.
    Function(Rc<FunctionDecl>),
}

// Syntax trees can nest as deep as the source does. The derived drop glue
// would recurse once per level, so both node kinds are torn down with an
// explicit work list instead.

impl Expr {
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => {},
            Self::Assign { value: child, .. }
            | Self::Unary { right: child, .. }
            | Self::Grouping { expression: child } => out.push(take_expr(child)),
            Self::Binary { left, right, .. } | Self::Logical { left, right, .. } => {
                out.push(take_expr(left));
                out.push(take_expr(right));
            },
            Self::Call { callee, arguments, .. } => {
                out.push(take_expr(callee));
                out.append(arguments);
            },
        }
    }
}

fn take_expr(expr: &mut Box<Expr>) -> Expr {
    mem::replace(&mut **expr, Expr::Literal { value: LiteralValue::Nil })
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Stmt {
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Block { statements } => out.append(statements),
            Self::If { then_branch, else_branch, .. } => {
                out.push(take_stmt(then_branch));
                if let Some(else_branch) = else_branch.as_mut() {
                    out.push(take_stmt(else_branch));
                }
            },
            Self::While { body, .. } => out.push(take_stmt(body)),
            Self::Expression { .. } | Self::Print { .. } | Self::Var { .. } | Self::Function(_) => {},
        }
    }
}

fn take_stmt(stmt: &mut Box<Stmt>) -> Stmt {
    mem::replace(&mut **stmt, Stmt::Block { statements: Vec::new() })
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

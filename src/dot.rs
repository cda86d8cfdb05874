use crate::{
    ast::{Expr, Program, Statement},
    interpreter::value::Value,
};

const LITERAL_COLOR: &str = "#ffb3b3";
const IDENTIFIER_COLOR: &str = "#a3e4d7";
const OPERATOR_COLOR: &str = "#a9dfbf";
const ASSIGNMENT_COLOR: &str = "#f9e79f";
const PRINT_COLOR: &str = "#c39bd3";
const CONTROL_COLOR: &str = "#aed6f1";
const BLOCK_COLOR: &str = "#eaeded";

/// Renders a program as a Graphviz `digraph`.
///
/// The root node is labelled `Program` and every top-level statement hangs off
/// it in source order. Expressions become one node per AST node with an edge
/// from parent to child; statement lists inside `if`, `while` and `for` are
/// grouped under `then`, `else` and `body` nodes. Node identifiers are
/// numbered in pre-order, so the output is stable for a given program.
///
/// The result is plain DOT text; turning it into an image is left to the
/// `dot` tool.
///
/// # Example
/// ```
/// let program = pisc::parse("x = 1 + 2").unwrap();
/// let dot = pisc::dot::render(&program);
///
/// assert!(dot.starts_with("digraph AST {"));
/// assert!(dot.contains("label=\"Assignment (x)\""));
/// assert!(dot.contains("label=\"BinaryExpression (+)\""));
/// assert!(dot.contains("n0 -> n1"));
/// ```
#[must_use]
pub fn render(program: &Program) -> String {
    let mut graph = Graph::default();

    graph.out.push_str("digraph AST {\n");
    graph.out.push_str("    bgcolor=\"white\";\n    rankdir=TB;\n");
    graph.out.push_str("    node [fontname=\"Helvetica\"];\n");

    let root = graph.node("Program", "oval", "white");
    graph.statements(&program.statements, root);

    graph.out.push_str("}\n");
    graph.out
}

#[derive(Default)]
struct Graph {
    out:     String,
    next_id: usize,
}

impl Graph {
    fn node(&mut self, label: &str, shape: &str, color: &str) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.out.push_str(&format!(
            "    n{id} [label=\"{}\", shape={shape}, style=filled, fillcolor=\"{color}\", color=black];\n",
            escape(label)
        ));
        id
    }

    fn edge(&mut self, parent: usize, child: usize) {
        self.out.push_str(&format!("    n{parent} -> n{child} [color=\"gray50\"];\n"));
    }

    fn child(&mut self, parent: usize, label: &str, shape: &str, color: &str) -> usize {
        let id = self.node(label, shape, color);
        self.edge(parent, id);
        id
    }

    fn statements(&mut self, statements: &[Statement], parent: usize) {
        for statement in statements {
            self.statement(statement, parent);
        }
    }

    fn block(&mut self, label: &str, statements: &[Statement], parent: usize) {
        let id = self.child(parent, label, "box", BLOCK_COLOR);
        self.statements(statements, id);
    }

    fn statement(&mut self, statement: &Statement, parent: usize) {
        match statement {
            Statement::Assign { name, expr } => {
                let id = self.child(parent,
                                    &format!("Assignment ({name})"),
                                    "parallelogram",
                                    ASSIGNMENT_COLOR);
                self.expr(expr, id);
            },
            Statement::Print { expr } => {
                let id = self.child(parent, "FunctionCall (print)", "diamond", PRINT_COLOR);
                self.expr(expr, id);
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                let id = self.child(parent, "If", "hexagon", CONTROL_COLOR);
                self.expr(condition, id);
                self.block("then", then_branch, id);
                if let Some(else_branch) = else_branch {
                    self.block("else", else_branch, id);
                }
            },
            Statement::While { condition, body } => {
                let id = self.child(parent, "While", "hexagon", CONTROL_COLOR);
                self.expr(condition, id);
                self.block("body", body, id);
            },
            Statement::For { var, count, body } => {
                let id = self.child(parent,
                                    &format!("For ({var} in range({count}))"),
                                    "hexagon",
                                    CONTROL_COLOR);
                self.block("body", body, id);
            },
        }
    }

    fn expr(&mut self, expr: &Expr, parent: usize) {
        match expr {
            Expr::BinaryOp { left, op, right } => {
                let id = self.child(parent, &format!("BinaryExpression ({op})"), "box", OPERATOR_COLOR);
                self.expr(left, id);
                self.expr(right, id);
            },
            Expr::UnaryOp { op, operand } => {
                let id = self.child(parent, &format!("UnaryExpression ({op})"), "box", OPERATOR_COLOR);
                self.expr(operand, id);
            },
            Expr::Variable { name } => {
                self.child(parent, &format!("Identifier ({name})"), "ellipse", IDENTIFIER_COLOR);
            },
            Expr::String { value } => {
                self.child(parent, &format!("Literal = \"{value}\""), "ellipse", LITERAL_COLOR);
            },
            Expr::Number { value } => self.literal(&Value::from(*value), parent),
            Expr::Boolean { value } => self.literal(&Value::Bool(*value), parent),
            Expr::Null {} => self.literal(&Value::Null, parent),
        }
    }

    fn literal(&mut self, value: &Value, parent: usize) {
        self.child(parent, &format!("Literal = {value}"), "ellipse", LITERAL_COLOR);
    }
}

fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

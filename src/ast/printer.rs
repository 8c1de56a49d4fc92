use super::{
    ast::{Expr, Program, Stmt},
    statements::BlockStmt,
};

/// Renders a program as an indented outline, one node per line.
pub struct TreePrinter {
    indent: usize,
    lines: Vec<String>,
}

impl TreePrinter {
    pub fn new() -> TreePrinter {
        TreePrinter {
            indent: 0,
            lines: Vec::new(),
        }
    }

    pub fn print(mut self, program: &Program) -> Vec<String> {
        self.write_ln("Program");
        self.indent(|printer| program.body.iter().for_each(|stmt| printer.stmt(stmt)));
        self.lines
    }

    fn write_ln(&mut self, text: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        self.lines.push(format!("{}{}", indent, text));
    }

    fn indent<T>(&mut self, block: T)
    where
        T: FnOnce(&mut TreePrinter),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }

    fn block(&mut self, label: &str, block: &BlockStmt) {
        self.write_ln(label);
        self.indent(|printer| block.iter().for_each(|stmt| printer.stmt(stmt)));
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FnDecl(decl) => {
                let parameters = decl
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", p.param_type, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.write_ln(&format!("FunctionDecl {}({})", decl.identifier, parameters));
                self.indent(|printer| printer.block("Block", &decl.body));
            }
            Stmt::VarDecl(decl) => {
                let declared = decl
                    .declared_type
                    .map_or(String::from("var"), |t| t.to_string());
                self.write_ln(&format!("VarDecl {} {}", declared, decl.identifier));
                if let Some(initializer) = &decl.initializer {
                    self.indent(|printer| printer.expr(initializer));
                }
            }
            Stmt::Assignment(assignment) => {
                self.write_ln(&format!("Assignment {}", assignment.target));
                self.indent(|printer| printer.expr(&assignment.value));
            }
            Stmt::If(if_stmt) => {
                self.write_ln("If");
                self.indent(|printer| {
                    printer.expr(&if_stmt.condition);
                    printer.block("Then", &if_stmt.then_body);
                    if let Some(else_body) = &if_stmt.else_body {
                        printer.block("Else", else_body);
                    }
                });
            }
            Stmt::While(while_stmt) => {
                self.write_ln("While");
                self.indent(|printer| {
                    printer.expr(&while_stmt.condition);
                    printer.block("Body", &while_stmt.body);
                });
            }
            Stmt::Return(ret) => {
                self.write_ln("Return");
                if let Some(value) = &ret.value {
                    self.indent(|printer| printer.expr(value));
                }
            }
            Stmt::Expression(stmt) => {
                self.write_ln("ExpressionStatement");
                self.indent(|printer| printer.expr(&stmt.expression));
            }
            Stmt::Print(print) => {
                self.write_ln("Print");
                self.indent(|printer| printer.expr(&print.expression));
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        self.write_ln(&expr.to_string());
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

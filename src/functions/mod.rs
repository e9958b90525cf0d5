pub mod polynomial_ast;

//! Flattens a parse tree into the parent → children lists a graph renderer consumes.
//!
//! Vertices are numbered in pre-order. A binary node has the children
//! `[left, operator, right]`, a number node has a single leaf holding its digits.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::Expr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    labels: Vec<String>,
    children: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn from_expr(expr: &Expr) -> Self {
        enum Pending<'e, 'a> {
            Expr(&'e Expr<'a>),
            Leaf(String),
        }

        let mut adjacency = Self::default();
        // Children are pushed in reverse so ids still come out in pre-order.
        let mut stack = vec![(None, Pending::Expr(expr))];
        while let Some((parent, pending)) = stack.pop() {
            let label = match &pending {
                Pending::Expr(expr) => expr.kind().to_string(),
                Pending::Leaf(label) => label.clone(),
            };
            let id = adjacency.add_vertex(label, parent);
            match pending {
                Pending::Expr(Expr::Number(digits)) => {
                    stack.push((Some(id), Pending::Leaf(digits.to_string())));
                }
                Pending::Expr(Expr::Binary { left, operator, right }) => stack.extend([
                    (Some(id), Pending::Expr(&**right)),
                    (Some(id), Pending::Leaf(operator.to_string())),
                    (Some(id), Pending::Expr(&**left)),
                ]),
                Pending::Leaf(_) => {}
            }
        }
        adjacency
    }

    fn add_vertex(&mut self, label: String, parent: Option<usize>) -> usize {
        let id = self.labels.len();
        self.labels.push(label);
        self.children.push(Vec::new());
        if let Some(parent) = parent {
            self.children[parent].push(id);
        }
        id
    }

    pub fn children(&self, id: usize) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }

    /// Every vertex that has children, with its children in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, children)| !children.is_empty())
            .map(|(id, children)| (id, children.as_slice()))
    }

    /// Graphviz source for the tree. Leaves are drawn as plain text.
    pub fn to_dot(&self) -> String {
        let nodes = self.vertices().map(|(id, label)| {
            let shape = if self.children(id).is_empty() { ", shape=plaintext" } else { "" };
            format!("    {id} [label={label:?}{shape}];\n")
        });
        let edges = self.iter().flat_map(|(parent, children)| {
            children.iter().map(move |child| format!("    {parent} -> {child};\n"))
        });
        format!("digraph {{\n{}}}\n", nodes.chain(edges).join(""))
    }

    fn vertex_name(&self, id: usize) -> String {
        format!("{}#{id}", self.labels[id])
    }
}

impl Display for Adjacency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (parent, children) in self.iter() {
            writeln!(
                f,
                "{} -> [{}]",
                self.vertex_name(parent),
                children.iter().map(|&c| self.vertex_name(c)).join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse;

    #[test]
    fn single_number() {
        let adjacency = Adjacency::from_expr(&parse("42").unwrap());
        assert_eq!(adjacency.vertices().collect_vec(), vec![(0, "number"), (1, "42")]);
        assert_eq!(adjacency.iter().collect_vec(), vec![(0, &[1][..])]);
        assert_eq!(adjacency.children(1), &[] as &[usize]);
        assert_eq!(adjacency.children(99), &[] as &[usize]);
    }

    #[test]
    fn precedence_tree() {
        let adjacency = Adjacency::from_expr(&parse("3+2*4").unwrap());

        assert_eq!(
            adjacency.vertices().map(|(_, label)| label).collect_vec(),
            vec!["expression", "number", "3", "+", "term", "number", "2", "*", "number", "4"]
        );
        assert_eq!(adjacency.children(0), &[1, 3, 4]);
        assert_eq!(adjacency.children(4), &[5, 7, 8]);
        assert_eq!(
            adjacency.to_string(),
            "expression#0 -> [number#1, +#3, term#4]\n\
             number#1 -> [3#2]\n\
             term#4 -> [number#5, *#7, number#8]\n\
             number#5 -> [2#6]\n\
             number#8 -> [4#9]\n"
        );
    }

    #[test]
    fn deep_chain() {
        let source = vec!["7"; 100_000].join("-");
        let adjacency = Adjacency::from_expr(&parse(&source).unwrap());

        assert_eq!(adjacency.vertices().count(), 4 * 100_000 - 2);
        assert_eq!(adjacency.children(0), &[1, 399_995, 399_996]);
        assert_eq!(adjacency.iter().count(), 2 * 100_000 - 1);
    }

    #[test]
    fn dot_output() {
        let adjacency = Adjacency::from_expr(&parse("1-2").unwrap());
        assert_eq!(
            adjacency.to_dot(),
            r#"digraph {
    0 [label="expression"];
    1 [label="number"];
    2 [label="1", shape=plaintext];
    3 [label="-", shape=plaintext];
    4 [label="number"];
    5 [label="2", shape=plaintext];
    0 -> 1;
    0 -> 3;
    0 -> 4;
    1 -> 2;
    4 -> 5;
}
"#
        );
    }
}

//! Graph traversal
//!
//! Walks a validated rule graph from its start node to exactly one output
//! node. At each branch node the block aggregator decides between the
//! `"yes"` and `"no"` edge sets; when the selected set fans out to several
//! candidates, every candidate is evaluated (no short-circuit) and the
//! last one that decided true is committed — that tie-break is load-bearing
//! for stored rules and must not be changed to first-match.
//!
//! A visited-set plus a step counter convert an undetected cycle into a
//! fatal error instead of a hang.

use crate::annotate::Annotator;
use crate::block::{evaluate_conditions, NodeDecision};
use crate::context::EvalContext;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::resolve::resolve_output_value;
use crate::result::Evaluation;
use std::collections::{HashMap, HashSet};
use verdict_core::{Edge, GraphError, Node, NodeKind, Quantifier, RuleGraph, Value};

/// Evaluate a rule graph against an input record.
///
/// The graph is treated as an immutable value: the annotated trace comes
/// back as a fresh copy inside [`Evaluation`]. Only structural problems
/// return `Err`; a rule that simply matches nothing yields
/// `decision_reached = false`.
pub fn evaluate(graph: &RuleGraph, record: &HashMap<String, Value>) -> Result<Evaluation> {
    evaluate_with_context(graph, &EvalContext::new(record.clone()))
}

/// Evaluate with a caller-built context (pinned clock, prepared record).
pub fn evaluate_with_context(graph: &RuleGraph, ctx: &EvalContext) -> Result<Evaluation> {
    evaluate_with_limit(graph, ctx, None)
}

/// Evaluate with an explicit step limit instead of the default bound.
pub fn evaluate_with_limit(
    graph: &RuleGraph,
    ctx: &EvalContext,
    max_steps: Option<usize>,
) -> Result<Evaluation> {
    graph.validate()?;
    // Every legal traversal enters each node at most once, so the node
    // count is already a generous ceiling
    let limit = max_steps.unwrap_or_else(|| graph.nodes.len().saturating_add(1));
    Traversal::new(graph, ctx, limit).run()
}

struct Traversal<'a> {
    graph: &'a RuleGraph,
    ctx: &'a EvalContext,
    annotator: Annotator,
    diagnostics: Vec<Diagnostic>,
    visited: Vec<String>,
    seen: HashSet<String>,
    steps: usize,
    limit: usize,
}

impl<'a> Traversal<'a> {
    fn new(graph: &'a RuleGraph, ctx: &'a EvalContext, limit: usize) -> Self {
        Self {
            graph,
            ctx,
            annotator: Annotator::new(graph),
            diagnostics: Vec::new(),
            visited: Vec::new(),
            seen: HashSet::new(),
            steps: 0,
            limit,
        }
    }

    fn run(mut self) -> Result<Evaluation> {
        let start = self
            .graph
            .start_node()
            .ok_or(GraphError::MissingStartNode)?;
        self.enter(&start.id)?;

        // Initial transition: the start node's sole unlabeled (or "yes")
        // successor
        let first = self
            .graph
            .outgoing(&start.id)
            .find(|e| e.is_unlabeled() || e.is_yes())
            .ok_or_else(|| GraphError::StartWithoutSuccessor {
                id: start.id.clone(),
            })?;
        self.annotator.take_edge(&first.id);
        let mut current = first.target.clone();

        // Set when a fan-out already evaluated the committed node; its
        // decision was true by construction
        let mut predecided = false;

        loop {
            self.enter(&current)?;
            let node = self
                .graph
                .node(&current)
                .ok_or_else(|| GraphError::DanglingEdge {
                    edge_id: current.clone(),
                })?;

            match node.kind {
                NodeKind::Output => return Ok(self.accept(node)),
                // Only the start node carries this kind; reaching one
                // mid-walk means the graph loops back
                NodeKind::Attribute => {
                    return Err(GraphError::CycleDetected { id: current }.into())
                }
                NodeKind::Conditional => {
                    let decision = if predecided {
                        predecided = false;
                        true
                    } else {
                        let nd = self.evaluate_branch(node);
                        self.annotator
                            .record_branch(&node.id, nd.decision, &nd.results);
                        nd.decision
                    };
                    self.annotator.accept_node(&node.id);

                    let selected: Vec<&Edge> = self
                        .graph
                        .outgoing(&node.id)
                        .filter(|e| if decision { e.is_yes() } else { e.is_no() })
                        .collect();

                    tracing::debug!(
                        node = %node.id,
                        decision,
                        candidates = selected.len(),
                        "branch evaluated"
                    );

                    match selected.as_slice() {
                        [] => {
                            // Aggregation came up false and no "no" edge
                            // continues the walk
                            self.annotator.prune_node(&node.id);
                            return Ok(self.reject());
                        }
                        [edge] => {
                            self.annotator.take_edge(&edge.id);
                            current = edge.target.clone();
                        }
                        _ => match self.resolve_fan_out(&selected)? {
                            Some(committed) => {
                                predecided = self
                                    .graph
                                    .node(&committed)
                                    .map(Node::is_branch)
                                    .unwrap_or(false);
                                current = committed;
                            }
                            None => return Ok(self.reject()),
                        },
                    }
                }
            }
        }
    }

    /// Evaluate every fan-out candidate in listed edge order and commit
    /// the last one that decided true. Losing siblings and their inbound
    /// edges are pruned; the committed edge is taken.
    fn resolve_fan_out(&mut self, edges: &[&Edge]) -> Result<Option<String>> {
        let mut committed: Option<&Edge> = None;

        for &edge in edges {
            let node = self
                .graph
                .node(&edge.target)
                .ok_or_else(|| GraphError::DanglingEdge {
                    edge_id: edge.id.clone(),
                })?;
            let decision = match node.kind {
                // A terminal candidate has nothing to evaluate and counts
                // as true
                NodeKind::Output => true,
                NodeKind::Conditional => {
                    let nd = self.evaluate_branch(node);
                    self.annotator
                        .record_branch(&node.id, nd.decision, &nd.results);
                    nd.decision
                }
                NodeKind::Attribute => {
                    return Err(GraphError::CycleDetected {
                        id: node.id.clone(),
                    }
                    .into())
                }
            };
            if decision {
                // Last true wins; earlier true candidates become pruned
                // siblings
                committed = Some(edge);
            }
        }

        match committed {
            Some(winner) => {
                for edge in edges {
                    if edge.id != winner.id {
                        self.annotator.prune_node(&edge.target);
                        self.annotator.prune_edge(&edge.id);
                    }
                }
                self.annotator.take_edge(&winner.id);
                tracing::debug!(committed = %winner.target, "fan-out resolved");
                Ok(Some(winner.target.clone()))
            }
            None => {
                for edge in edges {
                    self.annotator.prune_node(&edge.target);
                    self.annotator.prune_edge(&edge.id);
                }
                tracing::debug!("fan-out had no true candidate");
                Ok(None)
            }
        }
    }

    fn evaluate_branch(&mut self, node: &Node) -> NodeDecision {
        let quantifier = node.data.rule.unwrap_or(Quantifier::All);
        let blocks = node.data.conditions.as_deref().unwrap_or(&[]);
        evaluate_conditions(quantifier, blocks, self.ctx, &node.id, &mut self.diagnostics)
    }

    /// Guard each node entry against cycles and runaway walks.
    fn enter(&mut self, id: &str) -> std::result::Result<(), GraphError> {
        if !self.seen.insert(id.to_string()) {
            return Err(GraphError::CycleDetected { id: id.to_string() });
        }
        self.visited.push(id.to_string());
        self.steps += 1;
        if self.steps > self.limit {
            return Err(GraphError::StepLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    fn accept(mut self, node: &Node) -> Evaluation {
        self.annotator.mark_output(&node.id);

        let mut output_fields = HashMap::new();
        if let Some(assignments) = &node.data.output_fields {
            for assignment in assignments {
                output_fields.insert(
                    assignment.field.clone(),
                    resolve_output_value(&assignment.value, self.ctx),
                );
            }
        }

        tracing::debug!(output = %node.id, "decision reached");
        Evaluation {
            annotated: self.annotator.into_graph(),
            decision_reached: true,
            output_node_id: Some(node.id.clone()),
            output_fields,
            visited: self.visited,
            diagnostics: self.diagnostics,
        }
    }

    fn reject(self) -> Evaluation {
        tracing::debug!("no matching branch; decision not reached");
        Evaluation {
            annotated: self.annotator.into_graph(),
            decision_reached: false,
            output_node_id: None,
            output_fields: HashMap::new(),
            visited: self.visited,
            diagnostics: self.diagnostics,
        }
    }
}

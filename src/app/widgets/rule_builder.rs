//! Drag-and-drop alert rule editor.
//!
//! Nodes live on an absolutely-positioned canvas and are moved with
//! pointer events; edges are drawn as SVG lines underneath them. The
//! graph is a sketchpad held in component state, not a saved rule.

use dioxus::prelude::*;

/// Canvas size in CSS pixels. Node positions are clamped to it.
const CANVAS_WIDTH: f64 = 760.0;
const CANVAS_HEIGHT: f64 = 420.0;
const NODE_WIDTH: f64 = 176.0;
const NODE_HEIGHT: f64 = 72.0;

/// Role of a node in a rule chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Trigger,
    Condition,
    Action,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Trigger => "Trigger",
            NodeKind::Condition => "Condition",
            NodeKind::Action => "Action",
        }
    }

    fn class(self) -> &'static str {
        match self {
            NodeKind::Trigger => "rule-node rule-node-trigger",
            NodeKind::Condition => "rule-node rule-node-condition",
            NodeKind::Action => "rule-node rule-node-action",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleNode {
    pub id: usize,
    pub kind: NodeKind,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Edges only flow forward through a chain. A trigger may feed an action
/// directly: a rule without a condition fires on every trigger event.
pub fn can_connect(from: NodeKind, to: NodeKind) -> bool {
    matches!(
        (from, to),
        (NodeKind::Trigger, NodeKind::Condition)
            | (NodeKind::Trigger, NodeKind::Action)
            | (NodeKind::Condition, NodeKind::Action)
    )
}

/// Validates and records an edge between two node ids.
pub fn connect(
    nodes: &[RuleNode],
    edges: &mut Vec<(usize, usize)>,
    from: usize,
    to: usize,
) -> Result<(), &'static str> {
    if from == to {
        return Err("a node cannot feed itself");
    }
    let from_kind = nodes.iter().find(|n| n.id == from).map(|n| n.kind);
    let to_kind = nodes.iter().find(|n| n.id == to).map(|n| n.kind);
    let (Some(from_kind), Some(to_kind)) = (from_kind, to_kind) else {
        return Err("node is gone");
    };
    if !can_connect(from_kind, to_kind) {
        return Err("rules flow trigger to condition to action");
    }
    if edges.contains(&(from, to)) {
        return Err("those nodes are already connected");
    }
    edges.push((from, to));
    Ok(())
}

/// Drops a node and every edge touching it.
pub fn remove_node(nodes: &mut Vec<RuleNode>, edges: &mut Vec<(usize, usize)>, id: usize) {
    nodes.retain(|n| n.id != id);
    edges.retain(|&(from, to)| from != id && to != id);
}

fn clamp_position(x: f64, y: f64) -> (f64, f64) {
    (
        x.clamp(0.0, CANVAS_WIDTH - NODE_WIDTH),
        y.clamp(0.0, CANVAS_HEIGHT - NODE_HEIGHT),
    )
}

fn starter_nodes() -> Vec<RuleNode> {
    vec![
        RuleNode {
            id: 0,
            kind: NodeKind::Trigger,
            text: "Chiller intake above 38.0 °C".to_string(),
            x: 24.0,
            y: 40.0,
        },
        RuleNode {
            id: 1,
            kind: NodeKind::Condition,
            text: "For longer than 10 minutes".to_string(),
            x: 280.0,
            y: 160.0,
        },
        RuleNode {
            id: 2,
            kind: NodeKind::Action,
            text: "Notify the Pune ops channel".to_string(),
            x: 540.0,
            y: 60.0,
        },
    ]
}

/// Pointer-drag state: which node, and where the pointer last was.
#[derive(Clone, Copy, PartialEq)]
struct Drag {
    node: usize,
    last_x: f64,
    last_y: f64,
}

#[component]
pub fn RuleBuilder() -> Element {
    let mut nodes = use_signal(starter_nodes);
    let mut edges = use_signal(|| vec![(0usize, 1usize), (1usize, 2usize)]);
    let mut next_id = use_signal(|| 3usize);
    let mut drag = use_signal(|| Option::<Drag>::None);
    let mut link_from = use_signal(|| Option::<usize>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut add_node = move |kind: NodeKind| {
        let id = next_id();
        next_id.set(id + 1);
        // Stagger new nodes so they do not stack on one spot.
        let (x, y) = clamp_position(24.0 + (id as f64 * 36.0) % 480.0, 24.0 + (id as f64 * 52.0) % 300.0);
        nodes.write().push(RuleNode {
            id,
            kind,
            text: format!("New {}", kind.label().to_lowercase()),
            x,
            y,
        });
    };

    let mut finish_link = move |target: usize| {
        let Some(from) = link_from() else {
            return;
        };
        link_from.set(None);
        let result = connect(&nodes(), &mut edges.write(), from, target);
        if let Err(reason) = result {
            notice.set(Some(reason.to_string()));
        } else {
            notice.set(None);
        }
    };

    // Edge endpoints snapshot for the SVG underlay.
    let node_list = nodes();
    let edge_lines: Vec<(f64, f64, f64, f64)> = edges()
        .iter()
        .filter_map(|&(from, to)| {
            let a = node_list.iter().find(|n| n.id == from)?;
            let b = node_list.iter().find(|n| n.id == to)?;
            Some((
                a.x + NODE_WIDTH / 2.0,
                a.y + NODE_HEIGHT / 2.0,
                b.x + NODE_WIDTH / 2.0,
                b.y + NODE_HEIGHT / 2.0,
            ))
        })
        .collect();
    let node_views: Vec<(usize, &'static str, &'static str, String, String)> = node_list
        .iter()
        .map(|n| {
            (
                n.id,
                n.kind.class(),
                n.kind.label(),
                n.text.clone(),
                format!(
                    "left:{}px;top:{}px;width:{}px;min-height:{}px;",
                    n.x, n.y, NODE_WIDTH, NODE_HEIGHT
                ),
            )
        })
        .collect();
    let linking = link_from();
    let notice_text = notice().unwrap_or_default();

    rsx! {
        section { class: "widget rule-builder",
            header { class: "widget-header",
                h3 { "Rule builder" }
                p { class: "text-muted",
                    "Sketch an alert rule. Drag nodes to arrange them, use Link to wire trigger, condition and action together."
                }
            }
            div { class: "rule-palette",
                button { class: "btn btn-sm", onclick: move |_| add_node(NodeKind::Trigger), "Add trigger" }
                button { class: "btn btn-sm", onclick: move |_| add_node(NodeKind::Condition), "Add condition" }
                button { class: "btn btn-sm", onclick: move |_| add_node(NodeKind::Action), "Add action" }
                if !notice_text.is_empty() {
                    span { class: "rule-notice", role: "status", "{notice_text}" }
                }
            }
            div {
                class: "rule-canvas",
                style: "width:{CANVAS_WIDTH}px;height:{CANVAS_HEIGHT}px;",
                onpointermove: move |e| {
                    let Some(current) = drag() else {
                        return;
                    };
                    let point = e.client_coordinates();
                    let dx = point.x - current.last_x;
                    let dy = point.y - current.last_y;
                    nodes.with_mut(|list| {
                        if let Some(node) = list.iter_mut().find(|n| n.id == current.node) {
                            let (x, y) = clamp_position(node.x + dx, node.y + dy);
                            node.x = x;
                            node.y = y;
                        }
                    });
                    drag.set(Some(Drag {
                        node: current.node,
                        last_x: point.x,
                        last_y: point.y,
                    }));
                },
                onpointerup: move |_| drag.set(None),
                onpointerleave: move |_| drag.set(None),

                svg {
                    class: "rule-edges",
                    view_box: "0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}",
                    width: "{CANVAS_WIDTH}",
                    height: "{CANVAS_HEIGHT}",
                    for (x1, y1, x2, y2) in edge_lines {
                        line {
                            x1: "{x1}",
                            y1: "{y1}",
                            x2: "{x2}",
                            y2: "{y2}",
                        }
                    }
                }

                for (id, class, kind_label, text, style) in node_views {
                    div {
                        key: "{id}",
                        class: "{class}",
                        class: if linking == Some(id) { "linking" },
                        style: "{style}",
                        onpointerdown: move |e| {
                            e.prevent_default();
                            let point = e.client_coordinates();
                            drag.set(Some(Drag {
                                node: id,
                                last_x: point.x,
                                last_y: point.y,
                            }));
                        },
                        header {
                            span { class: "rule-kind", "{kind_label}" }
                            button {
                                class: "btn btn-ghost btn-sm",
                                aria_label: "Delete node",
                                onpointerdown: move |e| e.stop_propagation(),
                                onclick: move |_| {
                                    nodes.with_mut(|list| {
                                        edges.with_mut(|edge_list| remove_node(list, edge_list, id));
                                    });
                                    if linking == Some(id) {
                                        link_from.set(None);
                                    }
                                },
                                "×"
                            }
                        }
                        p { "{text}" }
                        if linking.is_some() && linking != Some(id) {
                            button {
                                class: "btn btn-sm rule-port",
                                onpointerdown: move |e| e.stop_propagation(),
                                onclick: move |_| finish_link(id),
                                "Connect here"
                            }
                        } else if linking == Some(id) {
                            button {
                                class: "btn btn-sm rule-port",
                                onpointerdown: move |e| e.stop_propagation(),
                                onclick: move |_| link_from.set(None),
                                "Cancel link"
                            }
                        } else {
                            button {
                                class: "btn btn-sm rule-port",
                                onpointerdown: move |e| e.stop_propagation(),
                                onclick: move |_| {
                                    notice.set(None);
                                    link_from.set(Some(id));
                                },
                                "Link"
                            }
                        }
                    }
                }
            }
        }
    }
}

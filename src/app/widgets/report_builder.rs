//! Report layout builder.
//!
//! Blocks are appended from a palette and rearranged with HTML5 drag
//! events. Reordering is a plain array splice; whichever block the drop
//! lands on is where the dragged block ends up.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Summary,
    Chart,
    Table,
    Notes,
}

impl BlockKind {
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Summary => "Fleet summary",
            BlockKind::Chart => "Trend chart",
            BlockKind::Table => "Reading table",
            BlockKind::Notes => "Analyst notes",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            BlockKind::Summary => "Online counts and alert totals for the period.",
            BlockKind::Chart => "Hourly series for one device and metric.",
            BlockKind::Table => "Raw readings, newest first.",
            BlockKind::Notes => "Free-text commentary block.",
        }
    }
}

const PALETTE: &[BlockKind] = &[
    BlockKind::Summary,
    BlockKind::Chart,
    BlockKind::Table,
    BlockKind::Notes,
];

#[derive(Clone, Debug, PartialEq)]
pub struct ReportBlock {
    pub id: usize,
    pub kind: BlockKind,
}

/// Moves `from` so it sits at `to`, shifting everything between. Indexes
/// past the end are ignored rather than panicking; a drop on the source
/// block itself is a no-op.
pub fn reorder<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= list.len() || to >= list.len() {
        return;
    }
    let block = list.remove(from);
    list.insert(to, block);
}

fn starter_blocks() -> Vec<ReportBlock> {
    vec![
        ReportBlock {
            id: 0,
            kind: BlockKind::Summary,
        },
        ReportBlock {
            id: 1,
            kind: BlockKind::Chart,
        },
        ReportBlock {
            id: 2,
            kind: BlockKind::Table,
        },
    ]
}

#[component]
pub fn ReportBuilder() -> Element {
    let mut blocks = use_signal(starter_blocks);
    let mut next_id = use_signal(|| 3usize);
    let mut dragging = use_signal(|| Option::<usize>::None);

    let mut add_block = move |kind: BlockKind| {
        let id = next_id();
        next_id.set(id + 1);
        blocks.write().push(ReportBlock { id, kind });
    };

    let palette: Vec<(BlockKind, &'static str)> =
        PALETTE.iter().map(|&kind| (kind, kind.label())).collect();
    let block_views: Vec<(usize, usize, &'static str, &'static str)> = blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| (index, block.id, block.kind.label(), block.kind.blurb()))
        .collect();
    let drag_index = dragging();

    rsx! {
        section { class: "widget report-builder",
            header { class: "widget-header",
                h3 { "Report builder" }
                p { class: "text-muted",
                    "Compose the weekly report. Drag blocks to reorder; the order here is the order in the PDF."
                }
            }
            div { class: "report-palette",
                for (kind, label) in palette {
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| add_block(kind),
                        "Add {label}"
                    }
                }
            }
            if block_views.is_empty() {
                p { class: "text-muted", "No blocks yet. Add one from the palette above." }
            }
            ol { class: "report-blocks",
                for (index, id, label, blurb) in block_views {
                    li {
                        key: "{id}",
                        class: "report-block",
                        class: if drag_index == Some(index) { "dragging" },
                        draggable: "true",
                        ondragstart: move |_| dragging.set(Some(index)),
                        ondragover: move |e| e.prevent_default(),
                        ondrop: move |e| {
                            e.prevent_default();
                            if let Some(from) = dragging() {
                                blocks.with_mut(|list| reorder(list, from, index));
                            }
                            dragging.set(None);
                        },
                        ondragend: move |_| dragging.set(None),
                        div { class: "report-block-body",
                            strong { "{label}" }
                            p { class: "text-muted", "{blurb}" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            aria_label: "Remove block",
                            onclick: move |_| {
                                blocks.with_mut(|list| {
                                    list.retain(|b| b.id != id);
                                });
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_moves_forward() {
        let mut list = vec!["a", "b", "c", "d"];
        reorder(&mut list, 0, 2);
        assert_eq!(list, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn reorder_moves_backward() {
        let mut list = vec!["a", "b", "c", "d"];
        reorder(&mut list, 3, 1);
        assert_eq!(list, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_ignores_bad_indexes() {
        let mut list = vec!["a", "b"];
        reorder(&mut list, 5, 0);
        reorder(&mut list, 0, 5);
        reorder(&mut list, 1, 1);
        assert_eq!(list, vec!["a", "b"]);
    }
}

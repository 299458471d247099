//! Fixed chain of nested rectangle descriptors.
//!
//! The chain is a flat run of nodes built front to back once at construction
//! and never resized; neighbor lookup is plain index arithmetic with bounds
//! checks. Each node owns its animation progress and knows how to turn itself
//! into a fill command for the surface.

use crate::anim::Progress;

/// Result of a directional neighbor lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hop {
    /// A neighbor exists one step along the requested direction.
    Moved(usize),
    /// The node is terminal in that direction; the caller stays put.
    AtBoundary,
}

/// Axis-aligned fill command, in coordinates relative to the surface centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub alpha: f64,
}

/// One rectangle descriptor: a fixed position in the chain plus its progress.
#[derive(Clone, Copy, Debug)]
pub struct RectNode {
    index: usize,
    progress: Progress,
}

impl RectNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            progress: Progress::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    /// Fill rectangle for this node on a `width` x `height` surface shared by
    /// `count` nodes. Size grows with the index while opacity fades, so the
    /// front node is the smallest and the most solid. The vertical extent
    /// interpolates with the node's scale: the rectangle collapses upward
    /// into the centreline as the scale runs 0 to 1.
    pub fn rect(&self, count: usize, width: f64, height: f64) -> RectSpec {
        let n = count as f64;
        let rank = self.index as f64 + 1.0;
        let w = width / n * rank;
        let h = height / n * rank;
        let s = self.progress.scale();
        RectSpec {
            x: -w / 2.0,
            y: -h / 2.0 + h * s,
            w,
            h: h * (1.0 - s),
            alpha: (n - self.index as f64) / n,
        }
    }
}

/// The chain itself. Length is fixed at construction for the process
/// lifetime; only the per-node progress values mutate afterwards.
pub struct RectChain {
    nodes: Vec<RectNode>,
}

impl RectChain {
    /// Builds the chain front to back. An empty chain is a caller bug.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "rect chain needs at least one node");
        Self {
            nodes: (0..count).map(RectNode::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> &RectNode {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut RectNode {
        &mut self.nodes[index]
    }

    /// Neighbor of `from` one step along `direction` (+1 toward the back of
    /// the chain, -1 toward the front). `AtBoundary` when `from` is the
    /// terminal node in that direction.
    pub fn neighbor(&self, from: usize, direction: i8) -> Hop {
        if direction >= 0 {
            if from + 1 < self.nodes.len() {
                Hop::Moved(from + 1)
            } else {
                Hop::AtBoundary
            }
        } else if from > 0 {
            Hop::Moved(from - 1)
        } else {
            Hop::AtBoundary
        }
    }

    /// Fill commands in paint order: back of the chain first, so the front
    /// node overdraws everything behind it and lands topmost.
    pub fn draw_list(&self, width: f64, height: f64) -> Vec<RectSpec> {
        self.nodes
            .iter()
            .rev()
            .map(|node| node.rect(self.nodes.len(), width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Step;

    #[test]
    #[should_panic(expected = "at least one node")]
    fn empty_chain_is_rejected() {
        let _ = RectChain::new(0);
    }

    #[test]
    fn neighbor_walks_and_stops_at_boundaries() {
        let chain = RectChain::new(5);
        assert_eq!(chain.neighbor(0, 1), Hop::Moved(1));
        assert_eq!(chain.neighbor(3, 1), Hop::Moved(4));
        assert_eq!(chain.neighbor(4, 1), Hop::AtBoundary);
        assert_eq!(chain.neighbor(4, -1), Hop::Moved(3));
        assert_eq!(chain.neighbor(1, -1), Hop::Moved(0));
        assert_eq!(chain.neighbor(0, -1), Hop::AtBoundary);
    }

    #[test]
    fn rect_geometry_at_rest() {
        let chain = RectChain::new(5);
        // Front node: a fifth of the surface, fully opaque, centred.
        let front = chain.node(0).rect(5, 500.0, 250.0);
        assert_eq!(front.w, 100.0);
        assert_eq!(front.h, 50.0);
        assert_eq!(front.x, -50.0);
        assert_eq!(front.y, -25.0);
        assert_eq!(front.alpha, 1.0);
        // Back node: full surface, faintest.
        let back = chain.node(4).rect(5, 500.0, 250.0);
        assert_eq!(back.w, 500.0);
        assert_eq!(back.h, 250.0);
        assert_eq!(back.alpha, 1.0 / 5.0);
    }

    #[test]
    fn collapsed_node_draws_zero_height_at_centreline() {
        let mut chain = RectChain::new(5);
        let progress = chain.node_mut(0).progress_mut();
        progress.begin_cycle();
        while progress.advance(0.1, 1.0) != Step::Completed {}
        let spec = chain.node(0).rect(5, 500.0, 250.0);
        assert_eq!(spec.h, 0.0);
        // Collapsed upward into the centreline: top edge meets the old bottom.
        assert_eq!(spec.y, 25.0);
    }

    #[test]
    fn draw_list_paints_back_to_front_with_fading_alpha() {
        let chain = RectChain::new(5);
        let specs = chain.draw_list(500.0, 500.0);
        assert_eq!(specs.len(), 5);
        // First command is the largest, faintest rectangle; widths shrink and
        // alphas rise toward the front of the chain.
        for pair in specs.windows(2) {
            assert!(pair[0].w > pair[1].w);
            assert!(pair[0].alpha < pair[1].alpha);
        }
        assert_eq!(specs[0].w, 500.0);
        assert_eq!(specs[4].w, 100.0);
        assert_eq!(specs[4].alpha, 1.0);
    }
}

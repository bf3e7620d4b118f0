use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, Paint};
    use crate::scene::shapes::circle::CircleCmd;

    fn circle(r: f32) -> DrawCmd {
        DrawCmd::Circle(CircleCmd::new(
            Vec2::zero(),
            r,
            Paint::solid(Color::transparent()),
            None,
        ))
    }

    fn radius(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.radius,
            _ => panic!("expected circle"),
        }
    }

    #[test]
    fn paint_order_sorts_by_z() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(5), circle(5.0));
        list.push(ZIndex::new(0), circle(0.0));
        list.push(ZIndex::new(2), circle(2.0));

        let order: Vec<f32> = list.iter_in_paint_order().map(radius).collect();
        assert_eq!(order, vec![0.0, 2.0, 5.0]);
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(1), circle(10.0));
        list.push(ZIndex::new(1), circle(20.0));
        list.push(ZIndex::new(1), circle(30.0));

        let order: Vec<f32> = list.iter_in_paint_order().map(radius).collect();
        assert_eq!(order, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn clear_resets_ordering() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(3), circle(3.0));
        list.clear();
        assert!(list.is_empty());

        list.push(ZIndex::new(0), circle(7.0));
        let order: Vec<f32> = list.iter_in_paint_order().map(radius).collect();
        assert_eq!(order, vec![7.0]);
    }
}

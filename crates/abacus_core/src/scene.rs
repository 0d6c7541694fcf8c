//! Scene graph
//!
//! The [`Scene`] owns every mobject in a slot map. A [`MobjectId`] is a cheap,
//! copyable handle: callers keep ids and go through the scene to read or modify
//! the visual. Mobjects form a forest; only subtrees whose root was passed to
//! [`Scene::add`] are visible and appear in the display list.
//!
//! Transform operations (`shift`, `move_to`, `scale`, `next_to`) always act on
//! a whole subtree, so moving a group moves everything inside it.

use slotmap::{new_key_type, SlotMap};

use crate::color::Color;
use crate::display::{DisplayList, DrawCommand};
use crate::error::{CoreError, Result};
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::mobject::{Mobject, MobjectKind, MobjectProps};

new_key_type! {
    /// Handle to a mobject owned by a [`Scene`]
    pub struct MobjectId;
}

/// Arena of mobjects plus the ordered list of visible roots
#[derive(Clone, Debug, Default)]
pub struct Scene {
    mobjects: SlotMap<MobjectId, Mobject>,
    roots: Vec<MobjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            mobjects: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a detached mobject. It is not visible until added or parented.
    pub fn insert(&mut self, mobject: Mobject) -> MobjectId {
        let id = self.mobjects.insert(Mobject {
            parent: None,
            children: Default::default(),
            ..mobject
        });
        tracing::trace!(?id, "inserted mobject");
        id
    }

    /// Insert a mobject directly under `parent`
    pub fn insert_child(&mut self, parent: MobjectId, mobject: Mobject) -> Result<MobjectId> {
        self.get_or_err(parent)?;
        let id = self.insert(mobject);
        self.attach(parent, id, None);
        Ok(id)
    }

    /// Make a mobject a visible root, detaching it from any parent
    pub fn add(&mut self, id: MobjectId) -> Result<()> {
        self.get_or_err(id)?;
        self.detach(id);
        self.roots.push(id);
        tracing::trace!(?id, "added root");
        Ok(())
    }

    /// Hide a root. The mobject stays in the arena.
    pub fn remove(&mut self, id: MobjectId) -> Result<()> {
        self.get_or_err(id)?;
        self.roots.retain(|root| *root != id);
        Ok(())
    }

    /// Move `child` (with its subtree) under `parent`
    pub fn add_child(&mut self, parent: MobjectId, child: MobjectId) -> Result<()> {
        self.get_or_err(parent)?;
        self.get_or_err(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(CoreError::CycleDetected { parent, child });
        }
        self.detach(child);
        self.attach(parent, child, None);
        Ok(())
    }

    /// Detach `child` from `parent` without deleting it
    pub fn remove_child(&mut self, parent: MobjectId, child: MobjectId) -> Result<()> {
        self.get_or_err(parent)?;
        if self.get_or_err(child)?.parent == Some(parent) {
            self.detach(child);
        }
        Ok(())
    }

    /// Delete a mobject and all of its descendants.
    ///
    /// Returns the number of mobjects removed from the arena.
    pub fn remove_subtree(&mut self, id: MobjectId) -> Result<usize> {
        let doomed = self.descendants(id)?;
        self.detach(id);
        self.roots.retain(|root| *root != id);
        for node in &doomed {
            self.mobjects.remove(*node);
        }
        tracing::trace!(?id, count = doomed.len(), "removed subtree");
        Ok(doomed.len())
    }

    /// Replace `old` (and its subtree) with a fresh mobject in the same slot.
    ///
    /// The new mobject takes over the old one's parent and sibling position,
    /// or its root position when `old` was a visible root.
    pub fn replace(&mut self, old: MobjectId, mobject: Mobject) -> Result<MobjectId> {
        let parent = self.get_or_err(old)?.parent;
        let slot = match parent {
            Some(parent) => self.mobjects[parent]
                .children
                .iter()
                .position(|child| *child == old),
            None => None,
        };
        let root_slot = self.roots.iter().position(|root| *root == old);

        self.remove_subtree(old)?;
        let id = self.insert(mobject);
        if let Some(parent) = parent {
            self.attach(parent, id, slot);
        } else if let Some(index) = root_slot {
            self.roots.insert(index, id);
        }
        Ok(id)
    }

    fn attach(&mut self, parent: MobjectId, child: MobjectId, slot: Option<usize>) {
        let children = &mut self.mobjects[parent].children;
        match slot {
            Some(index) if index <= children.len() => children.insert(index, child),
            _ => children.push(child),
        }
        self.mobjects[child].parent = Some(parent);
    }

    fn detach(&mut self, child: MobjectId) {
        if let Some(parent) = self.mobjects.get_mut(child).and_then(|m| m.parent.take()) {
            if let Some(parent) = self.mobjects.get_mut(parent) {
                parent.children.retain(|c| *c != child);
            }
        }
        self.roots.retain(|root| *root != child);
    }

    fn is_ancestor_or_self(&self, ancestor: MobjectId, mut node: MobjectId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.mobjects.get(node).and_then(|m| m.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get(&self, id: MobjectId) -> Option<&Mobject> {
        self.mobjects.get(id)
    }

    pub fn get_mut(&mut self, id: MobjectId) -> Option<&mut Mobject> {
        self.mobjects.get_mut(id)
    }

    fn get_or_err(&self, id: MobjectId) -> Result<&Mobject> {
        self.mobjects.get(id).ok_or(CoreError::UnknownMobject(id))
    }

    /// Mobject by handle, failing on stale ids
    pub fn mobject(&self, id: MobjectId) -> Result<&Mobject> {
        self.get_or_err(id)
    }

    pub fn props(&self, id: MobjectId) -> Result<&MobjectProps> {
        Ok(&self.get_or_err(id)?.props)
    }

    pub fn props_mut(&mut self, id: MobjectId) -> Result<&mut MobjectProps> {
        self.mobjects
            .get_mut(id)
            .map(|m| &mut m.props)
            .ok_or(CoreError::UnknownMobject(id))
    }

    /// Text content of a text mobject
    pub fn text(&self, id: MobjectId) -> Option<&str> {
        self.mobjects.get(id).and_then(Mobject::text_content)
    }

    pub fn contains(&self, id: MobjectId) -> bool {
        self.mobjects.contains_key(id)
    }

    pub fn children(&self, id: MobjectId) -> Result<&[MobjectId]> {
        Ok(self.get_or_err(id)?.children())
    }

    /// Visible roots in paint order
    pub fn roots(&self) -> &[MobjectId] {
        &self.roots
    }

    /// `id` and all of its descendants, depth-first pre-order
    pub fn descendants(&self, id: MobjectId) -> Result<Vec<MobjectId>> {
        self.get_or_err(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            // Reverse so the first child is visited first
            stack.extend(self.mobjects[node].children.iter().rev().copied());
        }
        Ok(out)
    }

    /// Whether the mobject is part of a visible root's subtree
    pub fn is_visible(&self, id: MobjectId) -> bool {
        let mut node = id;
        loop {
            match self.mobjects.get(node) {
                Some(mobject) => match mobject.parent {
                    Some(parent) => node = parent,
                    None => return self.roots.contains(&node),
                },
                None => return false,
            }
        }
    }

    /// Number of mobjects in the arena, visible or not
    pub fn len(&self) -> usize {
        self.mobjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobjects.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// Bounding box of the subtree rooted at `id`.
    ///
    /// Empty groups report a zero-size rect at their stored centre.
    pub fn bounds(&self, id: MobjectId) -> Result<Rect> {
        let mut acc: Option<Rect> = None;
        for node in self.descendants(id)? {
            if let Some(rect) = self.mobjects[node].own_bounds() {
                acc = Some(match acc {
                    Some(existing) => existing.union(&rect),
                    None => rect,
                });
            }
        }
        Ok(acc.unwrap_or_else(|| Rect::centered(self.mobjects[id].props.center, Size::ZERO)))
    }

    pub fn center(&self, id: MobjectId) -> Result<Point> {
        Ok(self.bounds(id)?.center())
    }

    /// Move the whole subtree by `delta`
    pub fn shift(&mut self, id: MobjectId, delta: Vec2) -> Result<()> {
        for node in self.descendants(id)? {
            self.mobjects[node].props.center += delta;
        }
        Ok(())
    }

    /// Move the subtree so its bounding-box centre lands on `point`
    pub fn move_to(&mut self, id: MobjectId, point: Point) -> Result<()> {
        let delta = point - self.center(id)?;
        self.shift(id, delta)
    }

    /// Scale the subtree about its bounding-box centre
    pub fn scale(&mut self, id: MobjectId, factor: f32) -> Result<()> {
        let pivot = self.center(id)?;
        for node in self.descendants(id)? {
            let props = &mut self.mobjects[node].props;
            props.center = pivot + (props.center - pivot) * factor;
            props.scale *= factor;
        }
        Ok(())
    }

    /// Place `id` next to `anchor` in `direction`, `buff` units apart.
    ///
    /// The edge of `id` facing the anchor is aligned with the anchor's edge in
    /// `direction`. A zero direction centres `id` on the anchor.
    pub fn next_to(
        &mut self,
        id: MobjectId,
        anchor: MobjectId,
        direction: Vec2,
        buff: f32,
    ) -> Result<()> {
        let target = self.bounds(anchor)?.edge_point(direction);
        let align = self.bounds(id)?.edge_point(-direction);
        let delta = (target - align) + direction * buff;
        tracing::debug!(?id, ?anchor, ?direction, buff, "next_to");
        self.shift(id, delta)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Style
    // ─────────────────────────────────────────────────────────────────────────

    /// Set stroke/text color on the whole subtree
    pub fn set_color(&mut self, id: MobjectId, color: Color) -> Result<()> {
        for node in self.descendants(id)? {
            self.mobjects[node].props.color = color;
        }
        Ok(())
    }

    /// Set fill on every shape in the subtree; text is left untouched
    pub fn set_fill(&mut self, id: MobjectId, color: Color, opacity: Option<f32>) -> Result<()> {
        for node in self.descendants(id)? {
            let mobject = &mut self.mobjects[node];
            if mobject.text_content().is_some() {
                continue;
            }
            mobject.props.fill_color = color;
            if let Some(opacity) = opacity {
                mobject.props.fill_opacity = opacity;
            }
        }
        Ok(())
    }

    /// Set fill opacity on every shape in the subtree
    pub fn set_fill_opacity(&mut self, id: MobjectId, opacity: f32) -> Result<()> {
        for node in self.descendants(id)? {
            let mobject = &mut self.mobjects[node];
            if mobject.text_content().is_none() {
                mobject.props.fill_opacity = opacity;
            }
        }
        Ok(())
    }

    pub fn set_opacity(&mut self, id: MobjectId, opacity: f32) -> Result<()> {
        for node in self.descendants(id)? {
            self.mobjects[node].props.opacity = opacity;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Flatten the visible scene into paint order
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        for root in &self.roots {
            let Ok(nodes) = self.descendants(*root) else {
                continue;
            };
            for node in nodes {
                if let Some(command) = self.draw_command(node) {
                    list.push(command);
                }
            }
        }
        list.sort_by_z(|id| {
            self.mobjects
                .get(id)
                .map(|m| m.props.z_index)
                .unwrap_or_default()
        });
        list
    }

    fn draw_command(&self, id: MobjectId) -> Option<DrawCommand> {
        let mobject = self.mobjects.get(id)?;
        let props = &mobject.props;
        let stroke = props.color.with_alpha(props.color.a * props.opacity);

        match &mobject.kind {
            MobjectKind::Rectangle { .. } => Some(DrawCommand::Rect {
                id,
                bounds: mobject.own_bounds()?,
                stroke,
                stroke_width: props.stroke_width,
                fill: props
                    .fill_color
                    .with_alpha(props.fill_color.a * props.fill_opacity * props.opacity),
            }),
            MobjectKind::Text {
                content,
                weight,
                font_size,
            } => Some(DrawCommand::Text {
                id,
                content: content.clone(),
                position: props.center,
                font_size: font_size * props.scale,
                weight: *weight,
                color: stroke,
            }),
            MobjectKind::Arrow {
                start,
                end,
                tip_length,
            } => Some(DrawCommand::Arrow {
                id,
                start: props.center + *start * props.scale,
                end: props.center + *end * props.scale,
                color: stroke,
                stroke_width: props.stroke_width,
                tip_length: tip_length * props.scale,
            }),
            MobjectKind::Group => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square(scene: &mut Scene) -> MobjectId {
        scene.insert(Mobject::square(1.0))
    }

    #[test]
    fn test_insert_is_hidden_until_added() {
        let mut scene = Scene::new();
        let id = unit_square(&mut scene);
        assert!(!scene.is_visible(id));
        assert!(scene.display_list().is_empty());

        scene.add(id).unwrap();
        assert!(scene.is_visible(id));
        assert_eq!(scene.display_list().len(), 1);
    }

    #[test]
    fn test_group_bounds_and_shift() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        let a = scene.insert_child(group, Mobject::square(1.0)).unwrap();
        let b = scene
            .insert_child(group, Mobject::square(1.0).at(Point::new(2.0, 0.0)))
            .unwrap();

        assert_eq!(scene.bounds(group).unwrap(), Rect::new(-0.5, -0.5, 3.0, 1.0));

        scene.shift(group, Vec2::UP).unwrap();
        assert_eq!(scene.props(a).unwrap().center, Point::new(0.0, 1.0));
        assert_eq!(scene.props(b).unwrap().center, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_next_to_right_with_zero_buff() {
        let mut scene = Scene::new();
        let a = unit_square(&mut scene);
        let b = unit_square(&mut scene);
        scene.next_to(b, a, Vec2::RIGHT, 0.0).unwrap();
        assert_eq!(scene.center(b).unwrap(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_next_to_up_with_buff() {
        let mut scene = Scene::new();
        let body = scene.insert(Mobject::square(1.0));
        let label = scene.insert(Mobject::text("0"));
        scene.next_to(label, body, Vec2::UP, 0.25).unwrap();

        let label_bounds = scene.bounds(label).unwrap();
        assert!((label_bounds.min_y() - 0.75).abs() < 1e-6);
        assert!((label_bounds.center().x).abs() < 1e-6);
    }

    #[test]
    fn test_next_to_zero_direction_centres() {
        let mut scene = Scene::new();
        let body = scene.insert(Mobject::square(1.0).at(Point::new(3.0, -2.0)));
        let text = scene.insert(Mobject::text("42"));
        scene.next_to(text, body, Vec2::ZERO, 0.0).unwrap();
        assert_eq!(scene.props(text).unwrap().center, Point::new(3.0, -2.0));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut scene = Scene::new();
        let outer = scene.insert(Mobject::group());
        let inner = scene.insert_child(outer, Mobject::group()).unwrap();

        assert_eq!(
            scene.add_child(inner, outer),
            Err(CoreError::CycleDetected {
                parent: inner,
                child: outer
            })
        );
        assert!(scene.add_child(outer, outer).is_err());
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        let first = scene.insert_child(group, Mobject::text("a")).unwrap();
        let last = scene.insert_child(group, Mobject::text("c")).unwrap();

        let replaced = scene.replace(first, Mobject::text("b")).unwrap();
        assert!(!scene.contains(first));
        assert_eq!(scene.children(group).unwrap(), &[replaced, last]);
        assert_eq!(scene.text(replaced), Some("b"));
    }

    #[test]
    fn test_remove_subtree_counts_descendants() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        scene.insert_child(group, Mobject::square(1.0)).unwrap();
        scene.insert_child(group, Mobject::text("x")).unwrap();
        scene.add(group).unwrap();

        assert_eq!(scene.remove_subtree(group).unwrap(), 3);
        assert!(scene.is_empty());
        assert!(scene.roots().is_empty());
        assert_eq!(
            scene.bounds(group),
            Err(CoreError::UnknownMobject(group))
        );
    }

    #[test]
    fn test_scale_about_center() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        let left = scene
            .insert_child(group, Mobject::square(1.0).at(Point::new(-1.0, 0.0)))
            .unwrap();
        scene
            .insert_child(group, Mobject::square(1.0).at(Point::new(1.0, 0.0)))
            .unwrap();

        scene.scale(group, 2.0).unwrap();
        let props = scene.props(left).unwrap();
        assert_eq!(props.center, Point::new(-2.0, 0.0));
        assert_eq!(props.scale, 2.0);
    }

    #[test]
    fn test_display_list_respects_z_index() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        let top = scene
            .insert_child(group, Mobject::square(1.0).with_z_index(1))
            .unwrap();
        let bottom = scene.insert_child(group, Mobject::text("v")).unwrap();
        scene.add(group).unwrap();

        let list = scene.display_list();
        let order: Vec<_> = list.commands().iter().map(DrawCommand::id).collect();
        assert_eq!(order, vec![bottom, top]);
    }

    #[test]
    fn test_set_fill_skips_text() {
        let mut scene = Scene::new();
        let group = scene.insert(Mobject::group());
        let square = scene.insert_child(group, Mobject::square(1.0)).unwrap();
        let text = scene.insert_child(group, Mobject::text("t")).unwrap();

        scene.set_fill(group, Color::RED, Some(0.5)).unwrap();
        assert_eq!(scene.props(square).unwrap().fill_color, Color::RED);
        assert_eq!(scene.props(square).unwrap().fill_opacity, 0.5);
        assert_eq!(scene.props(text).unwrap().fill_opacity, 0.0);
    }
}

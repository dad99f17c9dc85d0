use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute a rect for every element in the tree, keyed by element id.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let (intrinsic_w, intrinsic_h) = intrinsic_size(element);
    let width = resolve_size(element.width, available.width, intrinsic_w);
    let height = resolve_size(element.height, available.height, intrinsic_h);
    let rect = Rect::new(available.x, available.y, width, height);
    layout_element(element, rect, &mut result);
    log::debug!(
        "[layout] {} elements laid out in {}x{}",
        result.len(),
        available.width,
        available.height
    );
    result
}

/// Size an element wants when nothing constrains it: content plus padding
/// and border.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let frame = frame_size(element);
    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let width = text.split('\n').map(display_width).max().unwrap_or(0);
            let height = text.split('\n').count();
            (clamp_u16(width), clamp_u16(height))
        }
        Content::Children(children) => children_size(element, children),
    };

    let width = match element.width {
        Size::Fixed(w) => w,
        _ => content_w.saturating_add(frame.0),
    };
    let height = match element.height {
        Size::Fixed(h) => h,
        _ => content_h.saturating_add(frame.1),
    };
    (width, height)
}

fn children_size(element: &Element, children: &[Element]) -> (u16, u16) {
    let gaps = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);
    let sizes = children.iter().map(intrinsic_size);

    match element.direction {
        Direction::Row => {
            let (w, h) = sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| {
                (w.saturating_add(cw), h.max(ch))
            });
            (w.saturating_add(gaps), h)
        }
        Direction::Column => {
            let (w, h) = sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| {
                (w.max(cw), h.saturating_add(ch))
            });
            (w, h.saturating_add(gaps))
        }
    }
}

/// Horizontal and vertical space eaten by padding and border.
fn frame_size(element: &Element) -> (u16, u16) {
    let border = element.style.border.size() * 2;
    (
        element.padding.width().saturating_add(border),
        element.padding.height().saturating_add(border),
    )
}

fn resolve_size(size: Size, available: u16, intrinsic: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => intrinsic.min(available),
    }
}

fn layout_element(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let children = element.children();
    if children.is_empty() {
        return;
    }

    let border = element.style.border.size();
    let padding = element.padding;
    let inner = rect.shrink(
        padding.top + border,
        padding.right + border,
        padding.bottom + border,
        padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_total = if is_row { inner.width } else { inner.height };
    let cross_total = if is_row { inner.height } else { inner.width };

    let intrinsics: Vec<(u16, u16)> = children.iter().map(intrinsic_size).collect();
    let main_size_of = |child: &Element| if is_row { child.width } else { child.height };
    let cross_size_of = |child: &Element| if is_row { child.height } else { child.width };
    let main_of = |(w, h): (u16, u16)| if is_row { w } else { h };
    let cross_of = |(w, h): (u16, u16)| if is_row { h } else { w };

    // First pass: fixed and auto children claim their space, fill/flex
    // children collect weights.
    let gaps = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);
    let mut claimed = gaps;
    let mut total_weight: u64 = 0;
    for (child, intrinsic) in children.iter().zip(&intrinsics) {
        match main_size_of(child) {
            Size::Fixed(n) => claimed = claimed.saturating_add(n),
            Size::Auto => claimed = claimed.saturating_add(main_of(*intrinsic)),
            Size::Fill => total_weight += 1,
            Size::Flex(w) => total_weight += u64::from(w),
        }
    }
    let remaining = main_total.saturating_sub(claimed);

    // Second pass: place children along the main axis.
    let mut offset = 0u16;
    let mut distributed = 0u16;
    let mut weight_seen: u64 = 0;
    for (child, intrinsic) in children.iter().zip(&intrinsics) {
        let available_main = main_total.saturating_sub(offset);
        let main = match main_size_of(child) {
            Size::Fixed(n) => n.min(available_main),
            Size::Auto => main_of(*intrinsic).min(available_main),
            Size::Fill | Size::Flex(_) => {
                let weight = match main_size_of(child) {
                    Size::Flex(w) => u64::from(w),
                    _ => 1,
                };
                weight_seen += weight;
                // Cumulative rounding so the shares add up to `remaining`.
                let target = if total_weight == 0 {
                    0
                } else {
                    (u64::from(remaining) * weight_seen / total_weight) as u16
                };
                let share = target.saturating_sub(distributed);
                distributed = target;
                share.min(available_main)
            }
        };

        let cross = match cross_size_of(child) {
            Size::Fixed(n) => n.min(cross_total),
            Size::Auto => cross_of(*intrinsic).min(cross_total),
            Size::Fill | Size::Flex(_) => cross_total,
        };
        let cross_offset = match element.align {
            Align::Start => 0,
            Align::Center => (cross_total - cross) / 2,
            Align::End => cross_total - cross,
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset),
                inner.y.saturating_add(cross_offset),
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(offset),
                cross,
                main,
            )
        };
        layout_element(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

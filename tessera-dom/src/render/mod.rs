use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Color, ColorContext, EmptyTheme, Rgb, TextStyle, Theme};

/// Draw an element tree with no theme. Color variables fall back to the
/// defaults (white on black).
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_to_buffer_themed(element, layout, buf, &EmptyTheme);
}

/// Draw an element tree, resolving color variables against `theme`.
pub fn render_to_buffer_themed(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    theme: &dyn Theme,
) {
    let colors = ColorContext::new(theme);
    let inherited = Inherited {
        fg: Rgb::WHITE,
        text_style: TextStyle::new(),
    };
    render_element(element, layout, buf, &colors, inherited);
}

/// Foreground and text attributes flow from parent to children.
#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    colors: &ColorContext<'_>,
    inherited: Inherited,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let style = &element.style;
    let fg = resolve(colors, style.foreground.as_ref()).unwrap_or(inherited.fg);
    let current = Inherited {
        fg,
        text_style: inherited.text_style.merge(style.text_style),
    };

    if let Some(bg) = resolve(colors, style.background.as_ref()) {
        fill_rect(buf, rect, bg);
    }

    let border_fg = resolve(colors, style.border_color.as_ref()).unwrap_or(fg);
    render_border(element, rect, buf, border_fg);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, buf, current),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, colors, current);
            }
        }
    }
}

fn resolve(colors: &ColorContext<'_>, color: Option<&Color>) -> Option<Rgb> {
    color.and_then(|c| colors.resolve(c))
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer, current: Inherited) {
    let border = element.style.border.size();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    for (line_index, line) in text.split('\n').enumerate() {
        let y = inner.y.saturating_add(line_index as u16);
        if y >= inner.bottom() {
            break;
        }

        let available = inner.width as usize;
        let line = truncate_to_width(line, available);
        let offset = align_offset(display_width(&line), available, element.text_align);
        let mut x = inner.x.saturating_add(offset as u16);

        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x.saturating_add(width) > inner.right() {
                break;
            }

            // Keep whatever background is already under the text.
            let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(current.fg)
                    .with_bg(bg)
                    .with_style(current.text_style),
            );
            if width == 2 {
                if let Some(cell) = buf.get_mut(x + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, fg: Rgb) {
    let Some((tl, tr, bl, br, h, v)) = element.style.border.glyphs() else {
        return;
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, right, rect.y, tr, fg);
    set_char(buf, rect.x, bottom, bl, fg);
    set_char(buf, right, bottom, br, fg);

    for x in (rect.x + 1)..right {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, bottom, h, fg);
    }

    for y in (rect.y + 1)..bottom {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, right, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}

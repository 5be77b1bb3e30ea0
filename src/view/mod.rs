//! View module - software rendering of the grid window
//!
//! Draws the model into a back buffer using `Frame` and `TextPainter`, then
//! presents it through softbuffer. All geometry comes from `GridLayout`.

pub mod frame;

pub use frame::{Frame, TextPainter};

use anyhow::{anyhow, Context as _, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;
use winit::window::Window;

use gridpad::config::GridConfig;
use gridpad::grid::CellPosition;
use gridpad::layout::{GridLayout, Rect, CELL_PADDING_X, PAGE_PADDING};
use gridpad::model::{AppModel, SegmentPosition};
use gridpad::theme::GridTheme;
use gridpad::toolbar::{ToolbarAction, ToolbarStyle};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Monospace fonts tried in order when no font is configured
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Load the configured font, or the first fallback that exists
fn load_font(config: &GridConfig) -> Result<(Font, PathBuf)> {
    let candidates: Vec<PathBuf> = match &config.font_path {
        Some(path) => vec![path.clone()],
        None => FALLBACK_FONTS.iter().map(PathBuf::from).collect(),
    };

    for path in candidates {
        if !path.exists() {
            continue;
        }
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))?;
        return Ok((font, path));
    }

    match &config.font_path {
        Some(path) => Err(anyhow!("Font not found: {}", path.display())),
        None => Err(anyhow!(
            "No monospace font found; set font_path in the config or pass --font"
        )),
    }
}

/// Font size in physical pixels
fn scaled_font_size(base: f32, scale_factor: f64) -> f32 {
    base * scale_factor as f32
}

/// Line metrics and the advance of one monospace cell
fn font_metrics(font: &Font, font_size: f32) -> Result<(LineMetrics, f32)> {
    let line_metrics = font
        .horizontal_line_metrics(font_size)
        .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;
    let (metrics, _) = font.rasterize('M', font_size);
    Ok((line_metrics, metrics.advance_width))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so we draw here and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a renderer for the window, scaling the font by its DPI factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &GridConfig,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let (font, font_path) = load_font(config)?;
        tracing::info!("Using font {}", font_path.display());

        let font_size = scaled_font_size(config.font_size, scale_factor);
        let (line_metrics, char_width) = font_metrics(&font, font_size)?;

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        })
    }

    /// Re-derive font metrics after the window moved to a display with a
    /// different DPI
    pub fn set_scale_factor(&mut self, base_font_size: f32, scale_factor: f64) -> Result<()> {
        let font_size = scaled_font_size(base_font_size, scale_factor);
        let (line_metrics, char_width) = font_metrics(&self.font, font_size)?;

        self.font_size = font_size;
        self.line_metrics = line_metrics;
        self.char_width = char_width;
        self.glyph_cache.clear();
        Ok(())
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Draw the whole window and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        let layout = GridLayout::compute(model);
        let line_height = self.line_height();

        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.line_metrics.ascent,
                self.char_width,
                line_height,
            );

            frame.clear(model.theme.background.to_argb_u32());
            render_title(&mut frame, &mut painter, &layout, &model.theme);
            render_toolbar(&mut frame, &mut painter, &layout, &model.theme);
            render_header(&mut frame, &mut painter, &layout, model);
            render_body(&mut frame, &mut painter, &layout, model);
            render_status_bar(&mut frame, &mut painter, &layout, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Top offset that centers a text line inside a box
fn text_y(rect: Rect, line_height: usize) -> f32 {
    rect.y + ((rect.height - line_height as f32) / 2.0).max(0.0)
}

fn render_title(frame: &mut Frame, painter: &mut TextPainter, layout: &GridLayout, theme: &GridTheme) {
    let y = text_y(layout.title, painter.line_height());
    painter.draw(frame, layout.title.x, y, "Spreadsheet", theme.title.to_argb_u32());
}

fn render_toolbar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    layout: &GridLayout,
    theme: &GridTheme,
) {
    for button in &layout.toolbar {
        let rect = button.rect;
        let item = button.action.item();
        let mut text_color = theme.toolbar_text.to_argb_u32();

        match item.style {
            ToolbarStyle::Label | ToolbarStyle::Link => {}
            ToolbarStyle::Badge => frame.fill_rect(rect, theme.toolbar_badge.to_argb_u32()),
            ToolbarStyle::Outlined => frame.stroke_rect(rect, theme.grid_line.to_argb_u32()),
            ToolbarStyle::Primary => {
                frame.fill_rect(rect, theme.toolbar_primary.to_argb_u32());
                text_color = theme.background.to_argb_u32();
            }
        }

        // The toolbar title is not a button and sits flush left
        let x = if button.action == ToolbarAction::ToolBar {
            rect.x
        } else {
            rect.x + CELL_PADDING_X
        };
        painter.draw(frame, x, text_y(rect, painter.line_height()), item.label, text_color);
    }
}

fn render_header(frame: &mut Frame, painter: &mut TextPainter, layout: &GridLayout, model: &AppModel) {
    let theme = &model.theme;
    let header_bg = theme.header_background.to_argb_u32();
    let line = theme.grid_line.to_argb_u32();
    let text = theme.header_text.to_argb_u32();

    frame.fill_rect(layout.grid_area, theme.grid_background.to_argb_u32());
    frame.set_clip(Rect::new(
        layout.grid_area.x,
        layout.grid_area.y,
        layout.grid_area.width,
        layout.header_height,
    ));

    for (col, column) in model.grid.data.columns().iter().enumerate() {
        let Some(rect) = layout.header_rect(col) else {
            continue;
        };
        if rect.right() < layout.grid_area.x || rect.x > layout.grid_area.right() {
            continue;
        }
        frame.draw_bordered_rect(rect, header_bg, line);
        painter.draw_fitted(
            frame,
            rect.x + CELL_PADDING_X,
            text_y(rect, painter.line_height()),
            &column.label,
            rect.width - 2.0 * CELL_PADDING_X,
            text,
        );
    }

    let add = layout.add_column_rect();
    frame.draw_bordered_rect(add, header_bg, line);
    let plus_x = add.x + (add.width - painter.char_width()) / 2.0;
    painter.draw(frame, plus_x, text_y(add, painter.line_height()), "+", text);

    frame.clear_clip();
}

fn render_body(frame: &mut Frame, painter: &mut TextPainter, layout: &GridLayout, model: &AppModel) {
    let theme = &model.theme;
    let body = layout.body_rect();
    if layout.row_count == 0 || body.height <= 0.0 {
        return;
    }
    frame.set_clip(body);

    let first_row = (layout.viewport.scroll_y / layout.row_height).floor() as usize;
    let visible_rows = (body.height / layout.row_height).ceil() as usize + 1;
    let last_row = (first_row + visible_rows).min(layout.row_count);

    let line = theme.grid_line.to_argb_u32();
    let editing = model.grid.editing();

    for row in first_row..last_row {
        for (col, column) in model.grid.data.columns().iter().enumerate() {
            let pos = CellPosition::new(row, col);
            let Some(rect) = layout.cell_rect(pos) else {
                continue;
            };
            if rect.right() < body.x || rect.x > body.right() {
                continue;
            }

            frame.stroke_rect(rect, line);

            if editing == Some(pos) {
                render_cell_input(frame, painter, rect, model);
                continue;
            }

            let color = if column.is_editable() {
                theme.cell_text
            } else {
                theme.read_only_text
            };
            painter.draw_fitted(
                frame,
                rect.x + CELL_PADDING_X,
                text_y(rect, painter.line_height()),
                model.grid.data.value_at(pos),
                rect.width - 2.0 * CELL_PADDING_X,
                color.to_argb_u32(),
            );
        }
    }

    if let Some(rect) = model.grid.active().and_then(|pos| layout.cell_rect(pos)) {
        let border = theme.active_cell_border.to_argb_u32();
        frame.stroke_rect(rect, border);
        frame.stroke_rect(
            Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0),
            border,
        );
    }

    frame.clear_clip();
}

/// Edit input drawn in place of the cell text, scrolled to keep the caret visible
fn render_cell_input(frame: &mut Frame, painter: &mut TextPainter, rect: Rect, model: &AppModel) {
    let theme = &model.theme;
    let input = &model.ui.cell_input;
    let char_width = painter.char_width();

    frame.fill_rect(
        Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0),
        theme.editing_background.to_argb_u32(),
    );

    let inner_width = rect.width - 2.0 * CELL_PADDING_X;
    let visible_chars = ((inner_width / char_width).floor() as usize).max(1);
    let start = input.cursor().saturating_sub(visible_chars - 1);
    let shown: String = input.text().chars().skip(start).take(visible_chars).collect();

    let y = text_y(rect, painter.line_height());
    let text_color = theme.cell_text.to_argb_u32();
    painter.draw(frame, rect.x + CELL_PADDING_X, y, &shown, text_color);

    let caret_x = rect.x + CELL_PADDING_X + (input.cursor() - start) as f32 * char_width;
    frame.fill_rect(
        Rect::new(caret_x, y, 2.0, painter.line_height() as f32),
        text_color,
    );
}

fn render_status_bar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    layout: &GridLayout,
    model: &AppModel,
) {
    let theme = &model.theme;
    let bar = layout.status_bar;
    let fg = theme.status_bar_text.to_argb_u32();
    frame.fill_rect(bar, theme.status_bar_background.to_argb_u32());

    let y = text_y(bar, painter.line_height());
    let left = model.ui.status_bar.side_text(SegmentPosition::Left);
    painter.draw(frame, PAGE_PADDING, y, &left, fg);

    let right = model.ui.status_bar.side_text(SegmentPosition::Right);
    let right_width = right.chars().count() as f32 * painter.char_width();
    let x = (bar.right() - PAGE_PADDING - right_width).max(PAGE_PADDING);
    painter.draw(frame, x, y, &right, fg);
}

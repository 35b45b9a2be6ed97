use crate::app::events::AppEvent;
use anyhow::Result;
use image::{DynamicImage, GenericImageView};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use reqwest::Client;
use tokio::sync::mpsc;

/// How a decoded page is fitted to the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageFit {
    /// Fit inside the overlay box (paginated viewer).
    Window,
    /// Fill the overlay width, natural height (continuous-scroll viewer).
    Width,
}

/// One page image, pre-rendered as terminal half-block rows.
pub struct SheetPage {
    pub rows: Vec<Line<'static>>,
}

pub enum PagesState {
    Loading,
    Loaded(Vec<SheetPage>),
    Failed(String),
}

/// A page-load job for one opened sheet. The epoch ties the result back to
/// the viewer instance that asked for it; anything else is stale.
pub struct LoadRequest {
    pub epoch: u64,
    pub sources: Vec<String>,
    pub fit: PageFit,
    pub cols: u16,
    pub rows: u16,
}

/// Fetch, decode and pre-render the sheet's pages in the background. The
/// result is delivered over the event channel tagged with the request epoch;
/// if the viewer has moved on by then, the app drops it without touching
/// any state.
pub fn spawn_load(client: Client, tx: mpsc::Sender<AppEvent>, req: LoadRequest) {
    tokio::spawn(async move {
        let state = load_all(&client, &req).await;
        let _ = tx.send(AppEvent::PagesLoaded(req.epoch, state)).await;
    });
}

async fn load_all(client: &Client, req: &LoadRequest) -> PagesState {
    if req.sources.is_empty() {
        return PagesState::Failed("sheet has no pages".to_string());
    }

    let mut pages = Vec::with_capacity(req.sources.len());
    let mut failures = 0;
    for src in &req.sources {
        match load_page(client, src, req.fit, req.cols, req.rows).await {
            Ok(page) => pages.push(page),
            Err(e) => {
                tracing::warn!("page load failed for {}: {}", src, e);
                failures += 1;
                pages.push(placeholder(src));
            }
        }
    }

    if failures == req.sources.len() {
        PagesState::Failed(format!("no page could be loaded ({failures} failed)"))
    } else {
        PagesState::Loaded(pages)
    }
}

async fn load_page(
    client: &Client,
    src: &str,
    fit: PageFit,
    cols: u16,
    rows: u16,
) -> Result<SheetPage> {
    let bytes = fetch_bytes(client, src).await?;
    let img = image::load_from_memory(&bytes)?;
    Ok(render_page(&img, fit, cols, rows))
}

async fn fetch_bytes(client: &Client, src: &str) -> Result<Vec<u8>> {
    if src.starts_with("http://") || src.starts_with("https://") {
        let bytes = client
            .get(src)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    } else {
        Ok(tokio::fs::read(src).await?)
    }
}

/// Downscale to the viewport and convert to `▀` half-block rows
/// (fg = top pixel, bg = bottom pixel; 1 cell = 1x2 pixels). Constraining
/// the decode to the viewport keeps memory flat no matter how large the
/// source scans are.
pub fn render_page(img: &DynamicImage, fit: PageFit, cols: u16, rows: u16) -> SheetPage {
    let max_w = (cols.max(1)) as u32;
    let resized = match fit {
        PageFit::Window => img.resize(
            max_w,
            (rows.max(1) as u32) * 2,
            image::imageops::FilterType::Triangle,
        ),
        PageFit::Width => {
            let src_w = img.width().max(1) as u64;
            let h = ((img.height() as u64 * max_w as u64) / src_w).max(1) as u32;
            img.resize_exact(max_w, h, image::imageops::FilterType::Triangle)
        }
    };

    let (w, h) = resized.dimensions();
    let mut out = Vec::with_capacity(h.div_ceil(2) as usize);
    for y in (0..h).step_by(2) {
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(w as usize);
        for x in 0..w {
            let top = resized.get_pixel(x, y);
            let bottom = if y + 1 < h {
                resized.get_pixel(x, y + 1)
            } else {
                top
            };
            let fg = Color::Rgb(top[0], top[1], top[2]);
            let bg = Color::Rgb(bottom[0], bottom[1], bottom[2]);
            spans.push(Span::styled("▀", Style::default().fg(fg).bg(bg)));
        }
        out.push(Line::from(spans));
    }

    SheetPage { rows: out }
}

fn placeholder(src: &str) -> SheetPage {
    let name = src.rsplit('/').next().unwrap_or(src);
    SheetPage {
        rows: vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("⚠ could not load {name}"),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::raw(""),
        ],
    }
}

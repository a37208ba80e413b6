//! Word-cloud layout.
//!
//! Words are placed greedily in rank order along an Archimedean spiral that
//! starts at the canvas centre. Font size falls with rank; a word that does
//! not fit is retried at smaller sizes and dropped once it would go below
//! the minimum size. The layout is deterministic.

use crate::chart::kind::ChartKind;
use crate::chart::palette::Colormap;
use crate::chart::spec::{ChartBody, ChartSpec, PlacedWord};
use crate::config::{CanvasSize, ChartConfig};
use crate::error::Result;

const MIN_FONT_SIZE: f64 = 4.0;
const SHRINK_STEP: f64 = 0.9;
const SPIRAL_STEP: f64 = 0.1;
const SPIRAL_SPACING: f64 = 1.5;
const MARGIN: f64 = 2.0;

/// Lay out `words` (in rank order) on the configured canvas.
pub fn build_word_cloud(words: &[String], config: &ChartConfig) -> Result<ChartSpec> {
    let canvas = config.canvas;
    let placed = layout(words, canvas);

    if words.is_empty() {
        log::warn!("word cloud requested for an empty word list");
    } else if placed.len() < words.len() {
        log::debug!(
            "word cloud dropped {} of {} words that did not fit",
            words.len() - placed.len(),
            words.len()
        );
    }

    let body = ChartBody::WordCloud {
        canvas,
        interpolation: "bilinear".to_string(),
        words: placed,
    };

    Ok(ChartSpec::new(ChartKind::WordCloud, config, body).with_placeholder(words.is_empty()))
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w + MARGIN
            && other.x < self.x + self.w + MARGIN
            && self.y < other.y + other.h + MARGIN
            && other.y < self.y + self.h + MARGIN
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

fn layout(words: &[String], canvas: CanvasSize) -> Vec<PlacedWord> {
    let width = canvas.width as f64;
    let height = canvas.height as f64;
    let max_font = (height / 4.0).max(MIN_FONT_SIZE);
    let colors = Colormap::Viridis.discrete(words.len());

    let mut occupied: Vec<Rect> = Vec::with_capacity(words.len());
    let mut placed = Vec::with_capacity(words.len());

    for (rank, word) in words.iter().enumerate() {
        let weight = 1.0 - rank as f64 / words.len() as f64;
        let mut font_size = MIN_FONT_SIZE + (max_font - MIN_FONT_SIZE) * weight;

        while font_size >= MIN_FONT_SIZE {
            let (w, h) = text_extent(word, font_size);
            if let Some(rect) = find_position(w, h, width, height, &occupied) {
                occupied.push(rect);
                placed.push(PlacedWord {
                    text: word.clone(),
                    font_size,
                    x: rect.x,
                    y: rect.y,
                    width: rect.w,
                    height: rect.h,
                    color: colors[rank].clone(),
                });
                break;
            }
            font_size *= SHRINK_STEP;
        }
    }

    placed
}

/// Approximate box of `text` at `font_size`: CJK glyphs are square, other
/// characters roughly 0.6 em wide.
fn text_extent(text: &str, font_size: f64) -> (f64, f64) {
    let em: f64 = text
        .chars()
        .map(|c| if c.is_ascii() { 0.6 } else { 1.0 })
        .sum();
    (em * font_size, font_size)
}

fn find_position(w: f64, h: f64, width: f64, height: f64, occupied: &[Rect]) -> Option<Rect> {
    if w > width || h > height {
        return None;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = height / width;
    let max_radius = (width * width + height * height).sqrt() / 2.0;

    let mut t: f64 = 0.0;
    loop {
        let r = SPIRAL_SPACING * t;
        if r > max_radius {
            return None;
        }
        let rect = Rect {
            x: cx + r * t.cos() - w / 2.0,
            y: cy + r * aspect * t.sin() - h / 2.0,
            w,
            h,
        };
        if rect.inside(width, height) && occupied.iter().all(|o| !o.overlaps(&rect)) {
            return Some(rect);
        }
        t += SPIRAL_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_words_inside_canvas_without_overlap() {
        let list = words(&[
            "老鼠", "喜欢", "奶酪", "数据", "分析", "可视化", "图表", "词频", "统计", "中文",
        ]);
        let config = ChartConfig::default();
        let spec = build_word_cloud(&list, &config).unwrap();

        let ChartBody::WordCloud { words, canvas, .. } = &spec.body else {
            panic!("expected word cloud body");
        };
        assert_eq!(words.len(), list.len());
        assert_eq!(*canvas, config.canvas);
        for (i, a) in words.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0);
            assert!(a.x + a.width <= canvas.width as f64);
            assert!(a.y + a.height <= canvas.height as f64);
            for b in &words[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_font_size_falls_with_rank() {
        let list = words(&["第一", "第二", "第三"]);
        let spec = build_word_cloud(&list, &ChartConfig::default()).unwrap();
        let ChartBody::WordCloud { words, .. } = &spec.body else {
            panic!("expected word cloud body");
        };
        assert_eq!(words[0].text, "第一");
        assert!(words[0].font_size > words[1].font_size);
        assert!(words[1].font_size > words[2].font_size);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let list = words(&["老鼠", "喜欢", "奶酪", "cheese"]);
        let config = ChartConfig::default();
        assert_eq!(
            build_word_cloud(&list, &config).unwrap(),
            build_word_cloud(&list, &config).unwrap()
        );
    }

    #[test]
    fn test_empty_word_list_is_placeholder() {
        let spec = build_word_cloud(&[], &ChartConfig::default()).unwrap();
        assert!(spec.placeholder);
        assert_eq!(spec.mark_count(), 0);
        assert!(spec.axes.is_none());
    }

    #[test]
    fn test_oversized_word_dropped() {
        let config = ChartConfig::default().with_canvas(20, 10);
        let spec = build_word_cloud(&words(&["一个非常非常长的词语"]), &config).unwrap();
        assert_eq!(spec.mark_count(), 0);
        assert!(!spec.placeholder);
    }
}

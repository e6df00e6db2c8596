// Drawing seam between the particle field and the page's canvas. The field
// renders against this trait, so tests can record draw calls instead of
// needing a live 2d context.

use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: &str, width: f64);
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> CanvasSurface {
        CanvasSurface { context }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.context.begin_path();
        // arc() only errors on a negative radius
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context.set_fill_style_str(color);
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: &str, width: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(width);
        self.context.stroke();
    }
}

// Records draw calls for assertions in tests.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: String,
        width: f64,
    },
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color: color.to_owned(),
        });
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: &str, width: f64) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color: color.to_owned(),
            width,
        });
    }
}

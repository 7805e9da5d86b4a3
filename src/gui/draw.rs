use super::{App, Config};
use eframe::egui::{pos2, vec2, Color32, Rect, RichText, Sense, Stroke, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    pub(super) fn draw_status(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!("Generation: {}", self.generation)));
            ui.add_space(Config::STATUS_GAP);
            ui.label(Self::new_text(&format!(
                "Population: {}",
                self.grid.population()
            )));
            ui.add_space(Config::STATUS_GAP);
            ui.label(Self::new_text(&format!("Sparks: {}", self.last_sparks)));
            ui.add_space(Config::STATUS_GAP);
            ui.label(Self::new_text(&format!(
                "Tick: {:.2} s",
                self.ticker.measured_interval()
            )));
            if self.is_paused {
                ui.add_space(Config::STATUS_GAP);
                ui.label(Self::new_text("PAUSED"));
            }
            ui.add_space(Config::STATUS_GAP);
            ui.label(Self::new_text(
                "[Space] pause  [N] step  [R] reseed  [S] sparks  [C] clear",
            ));
        });
    }

    /// Stretches the field over the whole area, so cells follow the window's aspect ratio.
    pub(super) fn draw_field(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
        let painter = ui.painter_at(rect);
        painter.image(self.texture.id(), rect, uv, Color32::WHITE);

        let size = self.grid.size();
        let cell = vec2(
            rect.width() / size.width as f32,
            rect.height() / size.height as f32,
        );
        if cell.min_elem() < Config::MIN_CELL_SIZE_FOR_GAPS {
            return;
        }
        let stroke = Stroke::new(Config::CELL_GAP_WIDTH, Config::CELL_GAP_COLOR);
        for i in 1..size.width {
            let x = rect.left() + cell.x * i as f32;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for j in 1..size.height {
            let y = rect.top() + cell.y * j as f32;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }
    }
}

use super::{palette, Config};
use crate::{Grid, GridError, Settings, Sparker, TickTimer};
use eframe::egui::{
    CentralPanel, Context, Frame, Key, TextureHandle, TextureOptions, TopBottomPanel,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct App {
    pub(super) grid: Grid,             // Conway's GoL field.
    pub(super) sparker: Sparker,       // Random cell injection between generations.
    pub(super) sparks_enabled: bool,   // Flag indicating whether sparks are injected.
    pub(super) is_paused: bool,        // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,      // Run one tick on the next frame.
    pub(super) generation: u64,        // Current generation number.
    pub(super) last_sparks: usize,     // Number of cells sparked on the last tick.
    pub(super) ticker: TickTimer,      // Fires the simulation at a fixed interval.
    pub(super) texture: TextureHandle, // Texture handle of the field, one texel per cell.
}

/// Keys pressed during the current frame.
struct Commands {
    toggle_pause: bool,
    step: bool,
    reseed: bool,
    toggle_sparks: bool,
    clear: bool,
}

impl App {
    pub fn new(ctx: &Context, settings: Settings) -> Result<Self, GridError> {
        log::info!("starting with {:?}", settings);
        let grid = Grid::random(settings.grid, settings.seed)?;
        // sparks must not replay the seeding sequence
        let sparker = Sparker::new(settings.seed.map(|seed| seed.wrapping_add(1)));
        let texture = ctx.load_texture(
            Config::TEXTURE_NAME,
            palette::render(&grid),
            TextureOptions::NEAREST,
        );
        Ok(Self {
            grid,
            sparker,
            sparks_enabled: settings.sparks,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            last_sparks: 0,
            ticker: TickTimer::new(settings.tick_interval),
            texture,
        })
    }

    /// One animation step: sparks, snapshot for drawing, next generation.
    fn tick(&mut self) {
        self.last_sparks = if self.sparks_enabled {
            self.sparker.spark(&mut self.grid)
        } else {
            0
        };
        self.refresh_texture();

        log::debug!(
            "generation {}: population {}, {} sparks",
            self.generation,
            self.grid.population(),
            self.last_sparks
        );
        log::trace!("-----\n{}", self.grid);

        self.grid.next();
        self.generation += 1;
    }

    fn refresh_texture(&mut self) {
        let image = palette::render(&self.grid);
        self.texture.set(image, TextureOptions::NEAREST);
    }

    fn read_commands(ctx: &Context) -> Commands {
        ctx.input(|input| Commands {
            toggle_pause: input.key_pressed(Key::Space),
            step: input.key_pressed(Key::N),
            reseed: input.key_pressed(Key::R),
            toggle_sparks: input.key_pressed(Key::S),
            clear: input.key_pressed(Key::C),
        })
    }

    fn apply_commands(&mut self, commands: Commands) {
        if commands.toggle_pause {
            self.is_paused = !self.is_paused;
            log::info!("{}", if self.is_paused { "paused" } else { "resumed" });
        }
        if commands.step {
            self.do_one_step = true;
        }
        if commands.toggle_sparks {
            self.sparks_enabled = !self.sparks_enabled;
            log::info!("sparks {}", if self.sparks_enabled { "on" } else { "off" });
        }
        if commands.reseed {
            self.grid.randomize(&mut ChaCha8Rng::from_entropy());
            self.generation = 0;
            log::info!("field reseeded, population {}", self.grid.population());
            self.refresh_texture();
        }
        if commands.clear {
            self.grid.clear();
            log::info!("field cleared");
            self.refresh_texture();
        }
    }

    fn update_field(&mut self) {
        let due = self.ticker.poll();
        if (due && !self.is_paused) || self.do_one_step {
            self.tick();
            self.do_one_step = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let commands = Self::read_commands(ctx);
        self.apply_commands(commands);
        self.update_field();

        TopBottomPanel::bottom("status")
            .frame(
                Frame::default()
                    .inner_margin(Config::STATUS_MARGIN)
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| self.draw_status(ui));

        // the field takes the rest of the window
        CentralPanel::default()
            .frame(Frame::default().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw_field(ui));

        ctx.request_repaint_after(self.ticker.remaining());
    }
}

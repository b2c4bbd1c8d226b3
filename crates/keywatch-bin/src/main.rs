// keywatch — demo binary.
//
// Opens a window, binds a key registry to it, and logs transitions for the
// watched keys. Escape or closing the window exits.

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use keywatch::{KeyInputRegistry, codes};
use keywatch_winit::WinitSurface;
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser, Debug)]
#[command(name = "keywatch", about = "Log key transitions for watched keys")]
struct Args {
    /// Key names to watch (semantic names from the key table, e.g. A,
    /// Space, F1).
    #[arg(default_values_t = [
        String::from("A"),
        String::from("Space"),
        String::from("Enter"),
    ])]
    keys: Vec<String>,
}

struct DemoApp {
    surface: Rc<WinitSurface>,
    registry: KeyInputRegistry,
    window: Option<Window>,
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes().with_title("keywatch");
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(err) => {
                error!("window creation failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.surface.dispatch(&event);
                if self.registry.is_key_down(codes::ESCAPE) {
                    info!("Escape pressed, exiting");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Register press and release logging callbacks for each watched name.
fn watch_keys(registry: &KeyInputRegistry, names: &[String]) {
    for name in names {
        let Some(code) = codes::code_for(name) else {
            warn!("unknown key name {name:?}, skipping");
            continue;
        };
        let pressed_name = name.clone();
        registry.add_listener(
            Rc::new(move || info!("{pressed_name} pressed")),
            code,
            true,
            false,
        );
        let released_name = name.clone();
        registry.add_listener(
            Rc::new(move || info!("{released_name} released")),
            code,
            false,
            true,
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let surface = Rc::new(WinitSurface::new());
    let registry = KeyInputRegistry::new(surface.clone());
    registry.subscribe()?;
    watch_keys(&registry, &args.keys);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = DemoApp {
        surface,
        registry,
        window: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}

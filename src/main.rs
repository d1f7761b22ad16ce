use macroquad::prelude::*;
use infinite_life::{
    Camera, GameState, SimulationConfig,
    input, rendering,
    ui::BG_COLOR,
};

fn window_conf() -> Conf {
    let config = SimulationConfig::default();
    Conf {
        window_title: "Conway's Game of Life - Infinite Universe".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Log level comes from RUST_LOG
    env_logger::init();

    let config = SimulationConfig::default();
    let mut state = GameState::new(&config);
    let mut camera = Camera::new();
    log::info!("starting with {:?}", config);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            log::info!("exiting at generation {}", state.universe.generation());
            break;
        }

        let mouse_pos = mouse_position();

        // Process input
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera);
        input::handle_mouse_paint(&mut state, &camera, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera, &config);

        // Update game state
        state = state.tick(get_frame_time());

        clear_background(BG_COLOR);
        rendering::draw_cursor(&camera, mouse_pos);
        rendering::draw_universe(&state.universe, &camera);
        rendering::draw_hud(&state, &camera, mouse_pos);

        next_frame().await;
    }
}

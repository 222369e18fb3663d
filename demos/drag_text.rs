use hmi::{
    color,
    logging::{init_logging, LoggingConfig},
    Vec2f, Vec2i, Window, WindowEvent, WindowFlags, WindowRendererExt,
};

const HELLO_TEXT: [&str; 5] = [
    "# # ### #   #   ###      ##             #   # ### ##  #   ## ",
    "# # #   #   #   # #     #    #   #      #   # # # # # #   # #",
    "### ##  #   #   # #     #   ### ###     # # # # # ##  #   # #",
    "# # #   #   #   # #     #    #   #      # # # # # # # #   # #",
    "# # ### ### ### ###      ##              ###  ### # # ### ## ",
];

const GOLDEN_RATIO: f32 = 1.618_034;

fn contains(origin: Vec2f, size: Vec2f, point: Vec2f) -> bool {
    (origin.x()..=origin.x() + size.width()).contains(&point.x())
        && (origin.y()..=origin.y() + size.height()).contains(&point.y())
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut window = Window::new("Drag me", Vec2i::new(1024, 576), WindowFlags::default())?;
    let mut renderer = window.renderer()?;

    let text_size = Vec2i::new(HELLO_TEXT[0].len() as i32, HELLO_TEXT.len() as i32);
    let pixel_size = Vec2f::new(10., 10. * 3. / 5. * GOLDEN_RATIO);
    let size = text_size.cast::<f32>() * pixel_size;

    let mut position = (window.size().cast::<f32>() - size) / 2.;
    let mut dragging = false;
    let mut mouse_position = Vec2i::default();

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                WindowEvent::Closed => window.close(),
                WindowEvent::MouseButtonPressed(event) => {
                    let cursor = renderer.coords_from_position(event.position);
                    if contains(position, size, cursor) {
                        dragging = true;
                        mouse_position = event.position;
                    }
                }
                WindowEvent::MouseButtonReleased(_) => dragging = false,
                WindowEvent::MouseMoved { position: moved } => {
                    if dragging {
                        let old_cursor = renderer.coords_from_position(mouse_position);
                        let new_cursor = renderer.coords_from_position(moved);
                        position += new_cursor - old_cursor;
                    }

                    mouse_position = moved;
                }
                WindowEvent::Resized { size } => renderer.set_view_size(size.cast()),
                _ => {}
            }
        }

        renderer.clear(color::WHITE);

        for (y, row) in HELLO_TEXT.iter().enumerate() {
            for (x, _) in row.bytes().enumerate().filter(|(_, c)| *c == b'#') {
                let index = Vec2i::new(x as i32, y as i32).cast::<f32>();
                renderer.fill_rectangle(position + index * pixel_size, pixel_size, color::RED);
            }
        }

        renderer.display();
    }

    Ok(())
}

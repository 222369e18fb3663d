use hmi::{
    color,
    logging::{init_logging, LoggingConfig},
    Vec2f, Vec2i, Window, WindowEvent, WindowFlags, WindowRendererExt,
};

const OBJECT_SIZE: f32 = 200.;
const OBJECT_PADDING: f32 = 50.;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut window = Window::new("Features", Vec2i::new(1024, 576), WindowFlags::default())?;
    let renderer = window.renderer()?;

    let size = Vec2f::splat(OBJECT_SIZE);
    let radius = OBJECT_SIZE / 2.;
    let second_row = 1.5 * OBJECT_SIZE + 2. * OBJECT_PADDING;

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                WindowEvent::Closed => window.close(),
                WindowEvent::Resized { size } => log::info!("Resized to {size:?}"),
                _ => {}
            }
        }

        renderer.clear(color::WHITE);

        renderer.fill_rectangle(Vec2f::splat(OBJECT_PADDING), size, color::ORANGE);
        renderer.draw_rectangle(
            Vec2f::new(OBJECT_SIZE + 2. * OBJECT_PADDING, OBJECT_PADDING),
            size,
            color::CYAN,
        );

        renderer.fill_circle(
            Vec2f::new(OBJECT_PADDING + radius, second_row),
            radius,
            color::AZURE,
        );
        renderer.draw_circle(
            Vec2f::new(1.5 * OBJECT_SIZE + 2. * OBJECT_PADDING, second_row),
            radius,
            color::MAGENTA,
        );

        let x = 2. * OBJECT_SIZE + 3. * OBJECT_PADDING;
        renderer.draw_line(
            Vec2f::new(x, OBJECT_PADDING),
            Vec2f::new(x + OBJECT_SIZE, OBJECT_PADDING + OBJECT_SIZE),
            color::VIOLET,
        );
        renderer.draw_polygon(
            &[
                Vec2f::new(x + radius, second_row - radius),
                Vec2f::new(x + OBJECT_SIZE, second_row + radius),
                Vec2f::new(x, second_row + radius),
            ],
            color::SPRING.with_alpha(0.5),
        );

        renderer.display();
    }

    Ok(())
}

use escapetime_compute::{
    pixel_to_fractal, render, render_tile, render_to_vec, ColorScheme, FractalConfig, FractalType,
    PixelRect, Point, RgbaBuffer, TileRenderInput, Viewport,
};

#[test]
fn every_alpha_byte_is_opaque() {
    let mut surface = RgbaBuffer::new(10, 10);
    render(&mut surface, FractalType::Mandelbrot, &FractalConfig::default(), None);

    for (i, byte) in surface.pixels().iter().enumerate() {
        if i % 4 == 3 {
            assert_eq!(*byte, 255, "alpha at byte {i}");
        }
    }
}

#[test]
fn interior_points_render_black() {
    let config = FractalConfig::default();
    assert_eq!(config.color_scheme, ColorScheme::Rainbow);
    let mut surface = RgbaBuffer::new(10, 10);
    render(&mut surface, FractalType::Mandelbrot, &config, None);

    let viewport = Viewport::from_config(&config, 10, 10);
    let mut checked = 0;
    for py in 0..10 {
        for px in 0..10 {
            let c = pixel_to_fractal(px as f64, py as f64, &viewport, (10, 10));
            if c.norm_sqr() <= 0.25 * 0.25 {
                assert_eq!(surface.pixel(px, py), Some([0, 0, 0, 255]), "c = {c:?}");
                checked += 1;
            }
        }
    }
    assert!(checked >= 1);
}

#[test]
fn exterior_corner_is_colored() {
    let mut surface = RgbaBuffer::new(10, 10);
    render(&mut surface, FractalType::Mandelbrot, &FractalConfig::default(), None);
    // Pixel (0, 0) samples -2 - 1.5i, which escapes on the first step.
    assert_ne!(surface.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn identical_renders_are_byte_identical() {
    let config = FractalConfig {
        zoom: 2.0,
        offset_x: -0.75,
        offset_y: 0.1,
        color_scheme: ColorScheme::Sunset,
        ..Default::default()
    };
    let julia_c = Some(Point::new(-0.8, 0.156));
    for fractal in FractalType::ALL {
        let mut first = RgbaBuffer::new(40, 30);
        let mut second = RgbaBuffer::new(40, 30);
        render(&mut first, fractal, &config, julia_c);
        render(&mut second, fractal, &config, julia_c);
        assert_eq!(first.pixels(), second.pixels(), "{fractal}");
    }
}

#[test]
fn stitched_tiles_match_full_frame() {
    let config = FractalConfig {
        color_scheme: ColorScheme::Ocean,
        ..Default::default()
    };
    let (width, height) = (37, 23);
    let full = render_to_vec(width, height, FractalType::Julia, &config, None);

    let frame = TileRenderInput::full_frame(FractalType::Julia, &config, None, width, height);
    let mut stitched = vec![0u8; full.len()];
    for tile in PixelRect::tiles(width, height, 8) {
        let pixels = render_tile(&frame.with_tile(tile));
        for row in 0..tile.height as usize {
            let src = row * tile.width as usize * 4;
            let dst = ((tile.y as usize + row) * width as usize + tile.x as usize) * 4;
            let len = tile.width as usize * 4;
            stitched[dst..dst + len].copy_from_slice(&pixels[src..src + len]);
        }
    }

    assert_eq!(stitched, full);
}

#[test]
fn fractal_types_render_differently() {
    let config = FractalConfig::default();
    let mandelbrot = render_to_vec(32, 32, FractalType::Mandelbrot, &config, None);
    let julia = render_to_vec(32, 32, FractalType::Julia, &config, None);
    let ship = render_to_vec(32, 32, FractalType::BurningShip, &config, None);
    assert_ne!(mandelbrot, julia);
    assert_ne!(mandelbrot, ship);
}

#[test]
fn color_scheme_changes_exterior_only() {
    let fire = FractalConfig {
        color_scheme: ColorScheme::Fire,
        ..Default::default()
    };
    let gray = FractalConfig {
        color_scheme: ColorScheme::Grayscale,
        ..Default::default()
    };
    let a = render_to_vec(20, 20, FractalType::Mandelbrot, &fire, None);
    let b = render_to_vec(20, 20, FractalType::Mandelbrot, &gray, None);
    assert_ne!(a, b);

    for (pa, pb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
        let a_black = pa == [0, 0, 0, 255];
        let b_black = pb == [0, 0, 0, 255];
        if a_black && !b_black {
            panic!("grayscale colored a pixel fire left black: {pa:?} vs {pb:?}");
        }
    }
}

//! Scale regression test
//!
//! Exercises every resampling method end to end: output dimensions,
//! determinism across thread counts, and the known-value scenarios.

use texscale_core::PixelGrid;
use texscale_core::color::compose_rgb;
use texscale_resample::{
    AreaAverage, ResampleError, ResampleMethod, ResampleOptions, ResampleRequest,
    ResampleResult, Resampler, for_each_row, resize, scale, scale_to_size,
};
use texscale_test::{RegParams, checkerboard, gradient, noise, uniform};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let src = gradient(37, 23).expect("gradient");
    let (w, h) = src.dimensions();
    eprintln!("Source size: {}x{}", w, h);

    // --- Test 1: dimension invariant for every method and thread count ---
    let targets = [(1, 1), (5, 3), (18, 11), (37, 23), (74, 46), (100, 7)];
    for method in ResampleMethod::ALL {
        for threads in [1, 2, 4] {
            for &(tw, th) in &targets {
                let options = ResampleOptions::new(method, threads);
                let out = resize(&src, tw, th, &options).expect("resize");
                rp.compare_values(tw as f64, out.width() as f64, 0.0);
                rp.compare_values(th as f64, out.height() as f64, 0.0);
                rp.compare_values((tw * th) as f64, out.pixels().len() as f64, 0.0);
            }
        }
    }

    // --- Test 2: identity resize is an exact copy ---
    for method in ResampleMethod::ALL {
        let out = resize(&src, w, h, &ResampleOptions::new(method, 3)).expect("identity");
        rp.compare_grids(&src, &out);
    }

    // --- Test 3: scale factors ---
    let options = ResampleOptions::new(ResampleMethod::Bilinear, 2);
    let up2 = scale(&src, 2.0, 2.0, &options).expect("scale 2x");
    rp.compare_values((w * 2) as f64, up2.width() as f64, 0.0);
    rp.compare_values((h * 2) as f64, up2.height() as f64, 0.0);
    let aniso = scale(&src, 0.5, 1.5, &options).expect("aniso scale");
    rp.compare_values((w as f64 * 0.5).round(), aniso.width() as f64, 0.0);
    rp.compare_values((h as f64 * 1.5).round(), aniso.height() as f64, 0.0);
    eprintln!("  aniso scale(0.5, 1.5): {}x{}", aniso.width(), aniso.height());

    // --- Test 4: scale to size, with and without aspect ---
    let sized = scale_to_size(&src, 20, 0, &options).expect("scale_to_size");
    rp.compare_values(20.0, sized.width() as f64, 0.0);
    rp.compare_values(12.0, sized.height() as f64, 0.0);
    let exact = scale_to_size(&src, 9, 40, &options).expect("scale_to_size exact");
    rp.compare_values(9.0, exact.width() as f64, 0.0);
    rp.compare_values(40.0, exact.height() as f64, 0.0);

    // --- Test 5: request bundling matches the direct call ---
    let request = ResampleRequest::new(&src, 13, 29, &options);
    let via_request = request.execute().expect("execute");
    let direct = resize(&src, 13, 29, &options).expect("resize");
    rp.compare_grids(&direct, &via_request);

    assert!(rp.cleanup(), "scale regression test failed");
}

#[test]
fn scale_threads_reg() {
    let mut rp = RegParams::new("scale_threads");

    // --- Test 1: result independent of thread count ---
    let src = noise(61, 47, 7).expect("noise");
    let targets = [(13, 9), (30, 47), (61, 20), (150, 101), (7, 200)];
    for method in ResampleMethod::ALL {
        for &(tw, th) in &targets {
            let single = method.apply(&src, tw, th, 1).expect("1 thread");
            for threads in [2, 3, 8] {
                let multi = method.apply(&src, tw, th, threads).expect("n threads");
                rp.compare_grids(&single, &multi);
            }
        }
    }

    // --- Test 2: repeated runs are bit-identical ---
    let first = ResampleMethod::Bilinear.apply(&src, 29, 83, 4).expect("first");
    let second = ResampleMethod::Bilinear.apply(&src, 29, 83, 4).expect("second");
    rp.compare_grids(&first, &second);

    // --- Test 3: X then Y equals the explicit two-pass composition ---
    for method in ResampleMethod::ALL {
        let combined = method.apply(&src, 20, 90, 2).expect("combined");
        let x = method.apply_x(&src, 20, 2).expect("x pass");
        let xy = method.apply_y(&x, 90, 2).expect("y pass");
        rp.compare_grids(&xy, &combined);
    }

    // --- Test 4: large uniform grid, 1 vs 4 threads ---
    let color = compose_rgb(12, 200, 99);
    let big = uniform(2048, 2048, color).expect("uniform");
    let one = ResampleMethod::Bilinear.apply(&big, 50, 50, 1).expect("1 thread");
    let four = ResampleMethod::Bilinear.apply(&big, 50, 50, 4).expect("4 threads");
    rp.compare_grids(&one, &four);
    rp.compare_uniform(&one, color);

    assert!(rp.cleanup(), "scale_threads regression test failed");
}

#[test]
fn scale_box_reg() {
    let mut rp = RegParams::new("scale_box");

    // --- Test 1: uniform input stays uniform ---
    for color in [0xff336699, 0x80402010, 0x00000000, 0x01fefefe] {
        let src = uniform(17, 11, color).expect("uniform");
        for &(tw, th) in &[(1, 1), (4, 3), (16, 11), (17, 5)] {
            let out = ResampleMethod::Box.apply(&src, tw, th, 2).expect("box");
            rp.compare_uniform(&out, color);
        }
    }

    // --- Test 2: 4x4 checkerboard to 2x2 is mid-gray ---
    let black = 0x00000000;
    let white = 0xffffffff;
    let board = checkerboard(4, 4, 1, black, white).expect("checkerboard");
    let plain = AreaAverage { premultiply: false };
    let out = plain.apply(&board, 2, 2, 2).expect("box 2x2");
    rp.compare_uniform(&out, 0x80808080);
    for (qx, qy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let quadrant = board.average_region(qx * 2, qy * 2, qx * 2 + 1, qy * 2 + 1, false);
        rp.compare_values(quadrant as f64, out.get(qx, qy) as f64, 0.0);
    }

    // --- Test 3: premultiplied average keeps transparent black out of color ---
    let premultiplied = AreaAverage::default().apply(&board, 2, 2, 2).expect("box");
    rp.compare_uniform(&premultiplied, 0x80ffffff);

    // --- Test 4: box upsampling falls back to nearest ---
    let small = noise(5, 4, 3).expect("noise");
    let boxed = ResampleMethod::Box.apply(&small, 15, 8, 2).expect("box up");
    let nearest = ResampleMethod::Nearest.apply(&small, 15, 8, 2).expect("nearest up");
    rp.compare_grids(&nearest, &boxed);

    assert!(rp.cleanup(), "scale_box regression test failed");
}

#[test]
fn scale_bilinear_reg() {
    let mut rp = RegParams::new("scale_bilinear");

    // --- Test 1: 1xN column widened keeps every column equal to the source ---
    let column = gradient(1, 9).expect("gradient");
    let wide = ResampleMethod::Bilinear.apply(&column, 6, 9, 2).expect("widen");
    for y in 0..9 {
        for x in 0..6 {
            rp.compare_values(column.get(0, y) as f64, wide.get(x, y) as f64, 0.0);
        }
    }

    // --- Test 2: upscaling preserves the edge columns exactly ---
    let src = gradient(7, 5).expect("gradient");
    for tw in [7, 8, 13, 21, 64] {
        let out = ResampleMethod::Bilinear.apply(&src, tw, 5, 3).expect("upscale");
        for y in 0..5 {
            rp.compare_values(src.get(0, y) as f64, out.get(0, y) as f64, 0.0);
            rp.compare_values(src.get(6, y) as f64, out.get(tw - 1, y) as f64, 0.0);
        }
    }

    // --- Test 3: nearest never invents colors ---
    let noisy = noise(9, 9, 11).expect("noise");
    let sampled = ResampleMethod::Nearest.apply(&noisy, 4, 17, 2).expect("nearest");
    let all_from_source = sampled
        .pixels()
        .iter()
        .all(|p| noisy.pixels().contains(p));
    rp.compare_values(1.0, if all_from_source { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "scale_bilinear regression test failed");
}

#[test]
fn scale_wrapper_reg() {
    let mut rp = RegParams::new("scale_wrapper");

    // --- Test 1: wrapped caller memory resamples like an owned grid ---
    let owned = noise(12, 10, 5).expect("noise");
    let mut buf = owned.pixels().to_vec();
    let wrapped = PixelGrid::wrap(12, 10, &mut buf).expect("wrap");
    for method in ResampleMethod::ALL {
        let from_owned = method.apply(&owned, 7, 15, 2).expect("owned");
        let from_wrapped = method.apply(&wrapped, 7, 15, 2).expect("wrapped");
        rp.compare_grids(&from_owned, &from_wrapped);
        rp.compare_values(0.0, if from_wrapped.is_wrapper() { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 2: the source buffer is never written ---
    rp.compare_grids(&owned, &wrapped);

    assert!(rp.cleanup(), "scale_wrapper regression test failed");
}

/// Resampler whose X pass reads one column past the source edge.
struct OverreadingX;

impl Resampler for OverreadingX {
    fn apply_x(
        &self,
        src: &PixelGrid<'_>,
        target_width: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        let mut out = PixelGrid::new(target_width, src.height())?;
        for_each_row(out.pixels_mut(), target_width, threads, |y, row| {
            for (x, p) in row.iter_mut().enumerate() {
                *p = src.get(x as u32 + src.width(), y);
            }
        })?;
        Ok(out)
    }

    fn apply_y(
        &self,
        src: &PixelGrid<'_>,
        target_height: u32,
        threads: u32,
    ) -> ResampleResult<PixelGrid<'static>> {
        ResampleMethod::Nearest.apply_y(src, target_height, threads)
    }
}

#[test]
fn scale_failure_reg() {
    let mut rp = RegParams::new("scale_failure");

    // --- Test 1: a failing pass surfaces as an error through apply ---
    let src = noise(8, 6, 1).expect("noise");
    for threads in [1, 4] {
        let result = OverreadingX.apply(&src, 5, 3, threads);
        let reported = match result {
            Err(ResampleError::WorkerPanicked { message }) => {
                eprintln!("  {threads} thread(s): {message}");
                message.contains("out of bounds")
            }
            _ => false,
        };
        rp.compare_values(1.0, if reported { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 2: the healthy Y pass alone still succeeds ---
    let tall = OverreadingX.apply(&src, 8, 12, 2).expect("y only");
    rp.compare_values(12.0, tall.height() as f64, 0.0);

    assert!(rp.cleanup(), "scale_failure regression test failed");
}

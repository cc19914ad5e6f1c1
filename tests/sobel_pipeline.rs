use edgemap::{bmp, EdgeMapError, Filter, HoughFilter, Matrix, SobelFilter};

const PIXEL_PLANE_OFFSET: usize = 0x36;

/// Builds a minimal bitmap buffer: validated header fields plus a bottom-up
/// 8-bit pixel plane.
fn make_bmp(width: i32, height: i32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; PIXEL_PLANE_OFFSET];
    bytes[0] = b'B';
    bytes[1] = b'M';
    bytes[0x12..0x16].copy_from_slice(&width.to_le_bytes());
    bytes[0x16..0x1a].copy_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(pixels);
    bytes
}

#[test]
fn decode_places_bright_square_top_down() {
    #[rustfmt::skip]
    let pixels = [
        0, 0, 0, 0,
        0, 255, 255, 0,
        0, 255, 255, 0,
        0, 0, 0, 0,
    ];
    let image = bmp::decode(&make_bmp(4, 4, &pixels)).unwrap();

    let matrix = image.matrix();
    assert_eq!(matrix.rows(), 4);
    assert_eq!(matrix.cols(), 4);
    for i in 0..4 {
        for j in 0..4 {
            let expected = if (1..=2).contains(&i) && (1..=2).contains(&j) {
                255
            } else {
                0
            };
            assert_eq!(matrix.get(i, j), Some(expected), "cell ({i}, {j})");
        }
    }
}

#[test]
fn sobel_highlights_bright_square_boundary() {
    #[rustfmt::skip]
    let pixels = [
        0, 0, 0, 0,
        0, 255, 255, 0,
        0, 255, 255, 0,
        0, 0, 0, 0,
    ];
    let image = bmp::decode(&make_bmp(4, 4, &pixels)).unwrap();
    let magnitude = SobelFilter::new().apply(image.matrix()).unwrap();

    assert_eq!(magnitude.rows(), 4);
    assert_eq!(magnitude.cols(), 4);
    // Every bright-square cell sits on the square's boundary here.
    for i in 1..=2 {
        for j in 1..=2 {
            assert!(magnitude.get(i, j).unwrap() > 0, "cell ({i}, {j})");
        }
    }
    // Corners only touch the square diagonally; their response is weaker
    // than the boundary response.
    let boundary = magnitude.get(1, 1).unwrap();
    for (i, j) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
        assert!(magnitude.get(i, j).unwrap() < boundary, "corner ({i}, {j})");
    }
}

#[test]
fn sobel_is_zero_away_from_edges() {
    // 8x8 with the bright square centered: corners see a flat neighborhood.
    let mut pixels = [0u8; 64];
    for i in 3..=4 {
        for j in 3..=4 {
            pixels[i * 8 + j] = 255;
        }
    }
    let image = bmp::decode(&make_bmp(8, 8, &pixels)).unwrap();
    let magnitude = SobelFilter::new().apply(image.matrix()).unwrap();

    for (i, j) in [(0, 0), (0, 7), (7, 0), (7, 7)] {
        assert_eq!(magnitude.get(i, j), Some(0), "corner ({i}, {j})");
    }
    for (i, j) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        assert!(magnitude.get(i, j).unwrap() > 0, "cell ({i}, {j})");
    }
}

#[test]
fn sobel_on_uniform_matrix_is_zero_at_interior() {
    let matrix = Matrix::new(vec![7; 36], 6, 6).unwrap();
    let magnitude = SobelFilter::new().apply(&matrix).unwrap();

    // Borders may pick up the zero padding; interior cells see no gradient.
    for i in 1..5 {
        for j in 1..5 {
            assert_eq!(magnitude.get(i, j), Some(0), "cell ({i}, {j})");
        }
    }
}

#[test]
fn sobel_preserves_dimensions_of_non_square_input() {
    let matrix = Matrix::new(vec![3; 2 * 9], 2, 9).unwrap();
    let magnitude = SobelFilter::new().apply(&matrix).unwrap();
    assert_eq!(magnitude.rows(), 2);
    assert_eq!(magnitude.cols(), 9);
}

#[test]
fn filters_dispatch_through_the_capability_trait() {
    let matrix = Matrix::zeros(3, 3).unwrap();
    let filters: Vec<Box<dyn Filter>> =
        vec![Box::new(SobelFilter::new()), Box::new(HoughFilter::new())];

    assert!(filters[0].apply(&matrix).is_ok());
    let err = filters[1].apply(&matrix).err().unwrap();
    assert_eq!(err, EdgeMapError::NotImplemented("hough line detection"));
}

//! Batch-level properties of the merge engine over real glyph layout

use crate::batch::{merge_batch, merge_instances, BatchError, BatchInstance, MergedAttributeSet};
use crate::foundation::math::Vec2;
use crate::text::{FontCommon, FontDescription, GlyphMetrics, LayoutOptions, TextLayout};

fn grid_font() -> FontDescription {
    let common = FontCommon {
        line_height: 16.0,
        base: 12.0,
        scale_w: 256,
        scale_h: 64,
    };
    let chars = (b'!'..=b'~')
        .enumerate()
        .map(|(i, byte)| GlyphMetrics {
            id: u32::from(byte),
            x: (i as u32 % 32) * 8,
            y: (i as u32 / 32) * 16,
            width: 8,
            height: 16,
            x_offset: 0.0,
            y_offset: 0.0,
            x_advance: 9.0,
        })
        .chain(std::iter::once(GlyphMetrics {
            id: u32::from(b' '),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            x_offset: 0.0,
            y_offset: 0.0,
            x_advance: 9.0,
        }))
        .collect();
    FontDescription::new(common, chars, vec![]).unwrap()
}

fn layout() -> TextLayout {
    TextLayout::new(grid_font(), LayoutOptions::default())
}

const TEXTS: [&str; 6] = ["score", "", "x 2", "game over", "\u{e9}!", "lvl-07"];

fn inputs(n: usize) -> (Vec<&'static str>, Vec<Vec2>, Vec<Vec2>) {
    let texts = TEXTS.iter().copied().cycle().take(n).collect();
    let offsets = (0..n).map(|i| Vec2::new(i as f32 * 3.5, -(i as f32))).collect();
    let scales = (0..n).map(|i| Vec2::new(1.0 + i as f32 * 0.25, 0.75)).collect();
    (texts, offsets, scales)
}

#[test]
fn test_max_index_is_last_vertex() {
    let engine = layout();
    for n in 0..=12 {
        let (texts, offsets, scales) = inputs(n);
        let merged = merge_instances(&engine, &texts, &offsets, &scales).unwrap();

        match merged.indices.iter().max() {
            Some(&max) => assert_eq!(max as usize, merged.vertex_count() - 1),
            None => assert_eq!(merged.vertex_count(), 0),
        }
        assert_eq!(merged.positions.len(), merged.uvs.len());
        assert_eq!(merged.positions.len(), merged.offsets.len());
        assert_eq!(merged.positions.len(), merged.scales.len());
        assert_eq!(merged.instances().len(), n);
    }
}

#[test]
fn test_instance_ranges_cover_merged_buffers() {
    let engine = layout();
    let (texts, offsets, scales) = inputs(6);
    let merged = merge_instances(&engine, &texts, &offsets, &scales).unwrap();

    let mut expected_first = 0;
    for (i, range) in merged.instances().iter().enumerate() {
        assert_eq!(range.first_vertex, expected_first);
        expected_first += range.vertex_count;

        let first = range.first_index as usize;
        let last = first + range.index_count as usize;
        for &index in &merged.indices[first..last] {
            assert!(index >= range.first_vertex);
            assert!(index < range.first_vertex + range.vertex_count);
        }

        let vertex_end = (range.first_vertex + range.vertex_count) as usize;
        let vertices = range.first_vertex as usize * 2..vertex_end * 2;
        for pair in merged.offsets[vertices.clone()].chunks_exact(2) {
            assert_eq!(pair, &[offsets[i].x, offsets[i].y]);
        }
        for pair in merged.scales[vertices].chunks_exact(2) {
            assert_eq!(pair, &[scales[i].x, scales[i].y]);
        }
    }
    assert_eq!(expected_first as usize, merged.vertex_count());

    // "x 2" draws two glyphs; the unsupported 'é' in "é!" draws nothing
    assert_eq!(merged.instances()[2].vertex_count, 8);
    assert_eq!(merged.instances()[4].vertex_count, 4);
    assert_eq!(merged.instances()[1].vertex_count, 0);
}

#[test]
fn test_mismatched_lengths_rejected() {
    let engine = layout();
    let (texts, offsets, scales) = inputs(3);

    let cases = [
        merge_instances(&engine, &texts[..2], &offsets, &scales),
        merge_instances(&engine, &texts, &offsets[..2], &scales),
        merge_instances(&engine, &texts, &offsets, &scales[..1]),
    ];
    for result in cases {
        assert!(matches!(result, Err(BatchError::InvalidArgument(_))));
    }
}

fn bit_pattern(set: &MergedAttributeSet) -> Vec<u32> {
    set.positions
        .iter()
        .chain(&set.uvs)
        .chain(&set.offsets)
        .chain(&set.scales)
        .map(|v| v.to_bits())
        .chain(set.indices.iter().copied())
        .collect()
}

#[test]
fn test_rebuild_is_deterministic() {
    let engine = layout();
    let (texts, offsets, scales) = inputs(9);

    let first = merge_instances(&engine, &texts, &offsets, &scales).unwrap();
    let second = merge_instances(&engine, &texts, &offsets, &scales).unwrap();

    assert_eq!(first, second);
    assert_eq!(bit_pattern(&first), bit_pattern(&second));
}

#[test]
fn test_batch_instances_match_parallel_inputs() {
    let engine = layout();
    let (texts, offsets, scales) = inputs(5);

    let instances: Vec<_> = texts
        .iter()
        .zip(&offsets)
        .zip(&scales)
        .map(|((text, offset), scale)| BatchInstance::new(*text, *offset, *scale))
        .collect();

    assert_eq!(
        merge_batch(&engine, &instances).unwrap(),
        merge_instances(&engine, &texts, &offsets, &scales).unwrap()
    );
}

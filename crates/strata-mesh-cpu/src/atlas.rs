use strata_world::AtlasLayout;

/// Atlas tile a face maps into; tiles sit side by side along U in this order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TileClass {
    Top = 0,
    Side = 1,
    Bottom = 2,
}

impl TileClass {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Maps a tile-local UV in `[0,1]²` into the atlas, inset by the layout padding.
#[inline]
pub fn atlas_uv(layout: &AtlasLayout, class: TileClass, local: (f32, f32)) -> (f32, f32) {
    let tile = layout.tile_size();
    let pad = layout.padding();
    let u = class.index() as f32 * tile + pad + local.0 * (tile - 2.0 * pad);
    let v = pad + local.1 * (1.0 - 2.0 * pad);
    (u, v)
}

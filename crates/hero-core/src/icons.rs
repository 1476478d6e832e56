/// The three glyphs a particle can carry. All are 24x24 light-grey SVGs,
/// embedded as base64 data URIs so the canvas needs no network fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Grid,
    Frame,
    Document,
}

impl Icon {
    pub const ALL: [Icon; 3] = [Icon::Grid, Icon::Frame, Icon::Document];

    /// Position in [`Icon::ALL`]; the web side keys its decoded images on it.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Icon::Grid => 0,
            Icon::Frame => 1,
            Icon::Document => 2,
        }
    }

    pub fn data_uri(self) -> &'static str {
        match self {
            Icon::Grid => GRID_SVG,
            Icon::Frame => FRAME_SVG,
            Icon::Document => DOCUMENT_SVG,
        }
    }
}

const GRID_SVG: &str = concat!(
    "data:image/svg+xml;base64,",
    "PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0iI2U1ZTdlYiI+",
    "PHBhdGggZD0iTTQgOGg0VjRINHY0em02IDEyaDR2LTRoLTR2NHptLTYgMGg0di00SDR2NHptMC02aDR2LTRINHY0em02IDBo",
    "NHYtNGgtNHY0em02LTEwaDR2LTRoLTR2NHptLTYgNGg0VjhoLTR2NHptNiA2aDR2LTRoLTR2NHptMC02aDR2LTRoLTR2NHoiLz48L3N2Zz4=",
);

const FRAME_SVG: &str = concat!(
    "data:image/svg+xml;base64,",
    "PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0iI2U1ZTdlYiI+",
    "PHBhdGggZD0iTTE5IDNINWMtMS4xIDAtMiAuOS0yIDJ2MTRjMCAxLjEuOSAyIDIgMmgxNGMxLjEgMCAyLS45IDItMlY1YzAtMS4xLS45LTItMi0yem0wIDE2SDVWNWgxNHYxNHoiLz48L3N2Zz4=",
);

const DOCUMENT_SVG: &str = concat!(
    "data:image/svg+xml;base64,",
    "PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0iI2U1ZTdlYiI+",
    "PHBhdGggZD0iTTE5IDNINWMtMS4xIDAtMiAuOS0yIDJ2MTRjMCAxLjEuOSAyIDIgMmgxNGMxLjEgMCAyLS45IDItMlY1YzAtMS4xLS45LTItMi0yem0tMiAxNkg3di0yaDEwdjJ6bTAtNEg3di0yaDEwdjJ6bTAtNEg3VjdoMTB2MnoiLz48L3N2Zz4=",
);

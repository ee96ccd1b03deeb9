mod art;
mod field;
mod physics;

pub use field::SpriteField;

use art::CAT_ART;
use physics::{Size, SpriteState};

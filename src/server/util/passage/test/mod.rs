mod normalize;

use super::*;

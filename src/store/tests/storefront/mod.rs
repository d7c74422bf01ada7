mod add_to_cart;
mod apply_catalog;

use super::*;

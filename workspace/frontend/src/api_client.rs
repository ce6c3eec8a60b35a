pub mod predict;

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

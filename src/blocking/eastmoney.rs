//! Blocking twin of [`crate::eastmoney`].

use super::XueqiuClient;
use crate::XueqiuError;
use crate::eastmoney::{EastmoneyResponse, convertible_bond_request};

pub fn convertible_bond(
    client: &XueqiuClient,
    page_size: u32,
    page_number: u32,
) -> Result<EastmoneyResponse, XueqiuError> {
    client.request_api(&convertible_bond_request(page_size, page_number))
}

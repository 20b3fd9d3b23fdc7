//! Node identifier lookup for UUIDv1

use mac_address::{get_mac_address, mac_address_by_name};

use crate::Error;

/// Returns the hardware address of the first non-loopback network interface.
///
/// # Errors
///
/// Returns [`Error::InterfaceLookupFailed`] if the interfaces cannot be enumerated or none of
/// them carries a hardware address.
pub fn lookup_node() -> Result<[u8; 6], Error> {
    match get_mac_address() {
        Ok(Some(addr)) if addr.bytes() != [0u8; 6] => {
            log::debug!("using hardware address {} as node identifier", addr);
            Ok(addr.bytes())
        }
        Ok(_) => {
            log::debug!("no network interface with a hardware address");
            Err(Error::InterfaceLookupFailed(None))
        }
        Err(e) => Err(Error::InterfaceLookupFailed(Some(e))),
    }
}

/// Returns the hardware address of the network interface called `name`.
///
/// # Errors
///
/// Returns [`Error::InterfaceLookupFailed`] if the interface does not exist or has no hardware
/// address.
pub fn lookup_node_by_name(name: &str) -> Result<[u8; 6], Error> {
    match mac_address_by_name(name) {
        Ok(Some(addr)) => {
            log::debug!("using hardware address {} of {} as node identifier", addr, name);
            Ok(addr.bytes())
        }
        Ok(None) => Err(Error::InterfaceLookupFailed(None)),
        Err(e) => Err(Error::InterfaceLookupFailed(Some(e))),
    }
}

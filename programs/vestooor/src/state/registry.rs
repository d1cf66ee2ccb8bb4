use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use bytemuck::{Pod, Zeroable};

use crate::constants::{MAX_INSTANCES, REGISTRY_MAGIC, REGISTRY_VERSION};
use crate::error::VestooorError;

/// Emitted by the vestooor factory for every instance it deploys.
/// This program never emits it; the layout mirrors the factory's so receipts can be decoded.
#[event]
pub struct VestingContractCreated {
    pub instance_address: Pubkey,
    pub vestee: Pubkey,
    pub amount_to_vest: u128,
    pub vesting_end_ts: i64,
}

/// Fixed header in front of the persisted address list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct RegistryHeader {
    pub magic: [u8; 8],
    pub version: u32,
    pub count: u32,
    /// blake3 over the concatenated 32-byte keys.
    pub checksum: [u8; 32],
}

impl RegistryHeader {
    pub const SIZE: usize = core::mem::size_of::<RegistryHeader>();
}

/// Known vesting instance addresses, in the order they were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceRegistry {
    addresses: Vec<Pubkey>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn addresses(&self) -> &[Pubkey] {
        &self.addresses
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.addresses.contains(address)
    }

    /// Appends addresses not yet known; returns how many were new.
    /// Fails with `RegistryFull` at the first new address past `MAX_INSTANCES`;
    /// addresses recorded before that point are kept.
    pub fn record<I>(&mut self, addresses: I) -> std::result::Result<usize, VestooorError>
    where
        I: IntoIterator<Item = Pubkey>,
    {
        let before = self.addresses.len();
        for address in addresses {
            if address == Pubkey::default() || self.contains(&address) {
                continue;
            }
            if self.addresses.len() >= MAX_INSTANCES {
                return Err(VestooorError::RegistryFull);
            }
            self.addresses.push(address);
        }
        Ok(self.addresses.len() - before)
    }

    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, VestooorError> {
        let body: Vec<u8> = self
            .addresses
            .iter()
            .flat_map(|a| a.to_bytes())
            .collect();
        let header = RegistryHeader {
            magic: REGISTRY_MAGIC,
            version: REGISTRY_VERSION,
            count: u32::try_from(self.addresses.len())
                .map_err(|_| VestooorError::RegistryFull)?,
            checksum: *blake3::hash(&body).as_bytes(),
        };
        let mut out = Vec::with_capacity(RegistryHeader::SIZE + body.len());
        out.extend_from_slice(bytemuck::bytes_of(&header));
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Empty input is an empty registry (nothing persisted yet).
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, VestooorError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        if bytes.len() < RegistryHeader::SIZE {
            return Err(VestooorError::RegistryCorrupted);
        }
        let (head, body) = bytes.split_at(RegistryHeader::SIZE);
        let header: RegistryHeader =
            bytemuck::try_pod_read_unaligned(head).map_err(|_| VestooorError::RegistryCorrupted)?;

        if header.magic != REGISTRY_MAGIC || header.version != REGISTRY_VERSION {
            return Err(VestooorError::RegistryCorrupted);
        }
        let count = header.count as usize;
        if count > MAX_INSTANCES || body.len() != count * 32 {
            return Err(VestooorError::RegistryCorrupted);
        }
        if *blake3::hash(body).as_bytes() != header.checksum {
            return Err(VestooorError::RegistryCorrupted);
        }

        let mut registry = Self::default();
        for chunk in body.chunks_exact(32) {
            let key: [u8; 32] = chunk
                .try_into()
                .map_err(|_| VestooorError::RegistryCorrupted)?;
            registry.addresses.push(Pubkey::new_from_array(key));
        }
        Ok(registry)
    }
}

/// Pulls instance addresses out of raw Anchor event payloads (discriminator + borsh body).
/// Payloads of other events are skipped.
pub fn instance_addresses(events: &[Vec<u8>]) -> std::result::Result<Vec<Pubkey>, VestooorError> {
    let disc = VestingContractCreated::DISCRIMINATOR;
    let mut found = Vec::new();
    for payload in events {
        let Some(mut body) = payload.strip_prefix(disc) else {
            continue;
        };
        let created = VestingContractCreated::deserialize(&mut body)
            .map_err(|_| VestooorError::InvalidEvent)?;
        found.push(created.instance_address);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Event;

    fn created(instance: Pubkey) -> Vec<u8> {
        VestingContractCreated {
            instance_address: instance,
            vestee: Pubkey::new_unique(),
            amount_to_vest: 33,
            vesting_end_ts: 1_700_000_000,
        }
        .data()
    }

    #[test]
    fn record_dedupes_and_keeps_order() {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut reg = InstanceRegistry::new();
        assert_eq!(reg.record([a, b]).unwrap(), 2);
        assert_eq!(reg.record([b, Pubkey::default(), a]).unwrap(), 0);
        assert_eq!(reg.addresses(), &[a, b]);
    }

    #[test]
    fn bytes_round_trip() {
        let mut reg = InstanceRegistry::new();
        reg.record((0..4).map(|_| Pubkey::new_unique())).unwrap();
        let restored = InstanceRegistry::from_bytes(&reg.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, reg);

        assert_eq!(InstanceRegistry::from_bytes(&[]).unwrap(), InstanceRegistry::new());
        let empty = InstanceRegistry::new().to_bytes().unwrap();
        assert_eq!(empty.len(), RegistryHeader::SIZE);
        assert!(InstanceRegistry::from_bytes(&empty).unwrap().addresses().is_empty());
    }

    #[test]
    fn registry_is_capped_and_header_count_matches_body() {
        let mut reg = InstanceRegistry::new();
        let known = Pubkey::new_unique();
        reg.record([known]).unwrap();
        reg.record((1..MAX_INSTANCES).map(|_| Pubkey::new_unique())).unwrap();
        assert_eq!(reg.addresses().len(), MAX_INSTANCES);

        assert_eq!(reg.record([known]).unwrap(), 0);
        assert!(matches!(
            reg.record([Pubkey::new_unique()]),
            Err(VestooorError::RegistryFull)
        ));
        assert_eq!(reg.addresses().len(), MAX_INSTANCES);

        let bytes = reg.to_bytes().unwrap();
        let header: RegistryHeader =
            bytemuck::pod_read_unaligned(&bytes[..RegistryHeader::SIZE]);
        assert_eq!(header.count as usize, MAX_INSTANCES);
        assert_eq!(bytes.len(), RegistryHeader::SIZE + MAX_INSTANCES * 32);
        assert_eq!(InstanceRegistry::from_bytes(&bytes).unwrap(), reg);
    }

    #[test]
    fn header_count_past_cap_is_rejected() {
        let header = RegistryHeader {
            magic: REGISTRY_MAGIC,
            version: REGISTRY_VERSION,
            count: MAX_INSTANCES as u32 + 1,
            checksum: *blake3::hash(&[]).as_bytes(),
        };
        assert!(matches!(
            InstanceRegistry::from_bytes(bytemuck::bytes_of(&header)),
            Err(VestooorError::RegistryCorrupted)
        ));
    }

    #[test]
    fn corrupted_blobs_are_rejected() {
        let mut reg = InstanceRegistry::new();
        reg.record([Pubkey::new_unique(), Pubkey::new_unique()]).unwrap();
        let bytes = reg.to_bytes().unwrap();

        let mut flipped = bytes.clone();
        *flipped.last_mut().unwrap() ^= 0x01;
        assert!(matches!(
            InstanceRegistry::from_bytes(&flipped),
            Err(VestooorError::RegistryCorrupted)
        ));

        let mut bad_magic = bytes.clone();
        bad_magic[0] = b'X';
        assert!(InstanceRegistry::from_bytes(&bad_magic).is_err());

        assert!(InstanceRegistry::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(InstanceRegistry::from_bytes(&bytes[..10]).is_err());
    }

    #[test]
    fn extracts_instance_addresses_from_events() {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let unrelated = vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        let events = vec![created(a), unrelated, created(b)];
        assert_eq!(instance_addresses(&events).unwrap(), vec![a, b]);
        assert!(instance_addresses(&[]).unwrap().is_empty());

        let mut truncated = created(a);
        truncated.truncate(VestingContractCreated::DISCRIMINATOR.len() + 10);
        assert!(matches!(
            instance_addresses(&[truncated]),
            Err(VestooorError::InvalidEvent)
        ));
    }

    #[test]
    fn extracted_addresses_feed_the_registry() {
        let a = Pubkey::new_unique();
        let mut reg = InstanceRegistry::new();
        reg.record(instance_addresses(&[created(a)]).unwrap()).unwrap();
        assert!(reg.contains(&a));
    }
}

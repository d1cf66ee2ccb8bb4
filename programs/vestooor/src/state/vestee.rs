use anchor_lang::prelude::*;

use crate::constants::MAX_VESTEES;
use crate::error::VestooorError;

/// One vesting schedule to be created by the factory.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vestee {
    pub wallet: Pubkey,
    /// Base units streamed over the schedule.
    pub amount_to_vest: u128,
    /// Unix seconds at which the flow should have delivered everything.
    pub vesting_end_ts: i64,
}

/// What the factory is asked to create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VestingRequest {
    Single(Vestee),
    Batch {
        vestees: Vec<Vestee>,
        total_amount: u128,
    },
}

impl VestingRequest {
    pub fn total_amount(&self) -> u128 {
        match self {
            VestingRequest::Single(v) => v.amount_to_vest,
            VestingRequest::Batch { total_amount, .. } => *total_amount,
        }
    }
}

/// Vestees staged before vesting, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VesteeRoster {
    vestees: Vec<Vestee>,
}

impl VesteeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vestees(&self) -> &[Vestee] {
        &self.vestees
    }

    pub fn len(&self) -> usize {
        self.vestees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vestees.is_empty()
    }

    pub fn get(&self, wallet: &Pubkey) -> Option<&Vestee> {
        self.vestees.iter().find(|v| v.wallet == *wallet)
    }

    pub fn add(&mut self, vestee: Vestee) -> std::result::Result<(), VestooorError> {
        validate(&vestee)?;
        if self.vestees.len() >= MAX_VESTEES {
            return Err(VestooorError::VesteeListFull);
        }
        if self.get(&vestee.wallet).is_some() {
            return Err(VestooorError::DuplicateVestee);
        }
        self.vestees.push(vestee);
        Ok(())
    }

    /// Replaces the entry with the same wallet, keeping its position.
    pub fn update(&mut self, vestee: Vestee) -> std::result::Result<(), VestooorError> {
        validate(&vestee)?;
        let slot = self
            .vestees
            .iter_mut()
            .find(|v| v.wallet == vestee.wallet)
            .ok_or(VestooorError::VesteeNotFound)?;
        *slot = vestee;
        Ok(())
    }

    pub fn remove(&mut self, wallet: &Pubkey) -> std::result::Result<Vestee, VestooorError> {
        let idx = self
            .vestees
            .iter()
            .position(|v| v.wallet == *wallet)
            .ok_or(VestooorError::VesteeNotFound)?;
        Ok(self.vestees.remove(idx))
    }

    pub fn total_amount(&self) -> std::result::Result<u128, VestooorError> {
        self.vestees.iter().try_fold(0u128, |acc, v| {
            acc.checked_add(v.amount_to_vest)
                .ok_or(VestooorError::MathOverflow)
        })
    }

    /// A single vestee goes through `createVestingContract`, several through the batch call.
    pub fn request(&self) -> std::result::Result<VestingRequest, VestooorError> {
        match self.vestees.as_slice() {
            [] => Err(VestooorError::EmptyVesteeList),
            [only] => Ok(VestingRequest::Single(*only)),
            many => Ok(VestingRequest::Batch {
                vestees: many.to_vec(),
                total_amount: self.total_amount()?,
            }),
        }
    }
}

fn validate(vestee: &Vestee) -> std::result::Result<(), VestooorError> {
    if vestee.wallet == Pubkey::default() {
        return Err(VestooorError::InvalidPubkey);
    }
    if vestee.amount_to_vest == 0 {
        return Err(VestooorError::InvalidAmount);
    }
    if vestee.vesting_end_ts <= 0 {
        return Err(VestooorError::InvalidTimestamp);
    }
    Ok(())
}

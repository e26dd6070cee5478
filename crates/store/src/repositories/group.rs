//! Group repository for group creation, expense recording, and balance
//! snapshots.

use std::collections::HashSet;

use chrono::Utc;
use divvy_core::expense::{ExpenseError, ExpenseRecorder, NewExpense};
use divvy_core::settlement::MemberBalance;
use divvy_shared::types::{ExpenseId, GroupId, UserId};
use rust_decimal::Decimal;

use crate::state::{ExpenseRecord, GroupRecord, LedgerState, LedgerStore};

/// Error types for group operations.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    /// Group not found.
    #[error("Group not found: {0}")]
    NotFound(GroupId),

    /// A group must have at least one member.
    #[error("A group must have at least one member")]
    NoMembers,

    /// A listed member phone has no registered user.
    #[error("Member with phone '{0}' is not registered")]
    MemberNotRegistered(String),

    /// The same phone was listed twice in the member list.
    #[error("Member with phone '{0}' is listed more than once")]
    DuplicateMember(String),

    /// The expense payer is not a member of the group.
    #[error("Payer is not a member of this group: {0}")]
    PayerNotMember(UserId),

    /// An expense participant is not a member of the group.
    #[error("Participant is not a member of this group: {0}")]
    ParticipantNotMember(UserId),

    /// The expense itself failed validation.
    #[error(transparent)]
    Expense(#[from] ExpenseError),
}

impl GroupError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "GROUP_NOT_FOUND",
            Self::NoMembers => "NO_MEMBERS",
            Self::MemberNotRegistered(_) => "MEMBER_NOT_REGISTERED",
            Self::DuplicateMember(_) => "DUPLICATE_MEMBER",
            Self::PayerNotMember(_) => "PAYER_NOT_MEMBER",
            Self::ParticipantNotMember(_) => "PARTICIPANT_NOT_MEMBER",
            Self::Expense(e) => e.error_code(),
        }
    }
}

/// Group repository over the in-memory ledger.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    store: LedgerStore,
}

impl GroupRepository {
    /// Creates a new group repository.
    #[must_use]
    pub const fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Creates a group from a list of member phone numbers.
    ///
    /// Every phone must belong to a registered user and may appear only
    /// once. Members are stored in the order they were listed, and the
    /// group id is appended to each member's group list.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoMembers`] for an empty member list,
    /// [`GroupError::MemberNotRegistered`] for an unknown phone, and
    /// [`GroupError::DuplicateMember`] for a repeated phone.
    pub async fn create(&self, name: &str, member_phones: &[String]) -> Result<GroupRecord, GroupError> {
        let mut state = self.store.write().await;

        if member_phones.is_empty() {
            return Err(GroupError::NoMembers);
        }

        let mut members = Vec::with_capacity(member_phones.len());
        let mut seen = HashSet::with_capacity(member_phones.len());
        for phone in member_phones {
            let id = state
                .phone_index
                .get(phone)
                .copied()
                .ok_or_else(|| GroupError::MemberNotRegistered(phone.clone()))?;
            if !seen.insert(id) {
                return Err(GroupError::DuplicateMember(phone.clone()));
            }
            members.push(id);
        }

        let group = GroupRecord {
            id: GroupId::new(),
            name: name.to_string(),
            members,
            expenses: Vec::new(),
            created_at: Utc::now(),
        };

        for member in &group.members {
            if let Some(user) = state.users.get_mut(member) {
                user.groups.push(group.id);
            }
        }
        state.groups.insert(group.id, group.clone());

        Ok(group)
    }

    /// Finds a group by ID.
    pub async fn find(&self, group_id: GroupId) -> Option<GroupRecord> {
        let state = self.store.read().await;
        state.groups.get(&group_id).cloned()
    }

    /// Validates and records an expense, updating every affected balance.
    ///
    /// The membership checks, split computation, balance updates, and the
    /// expense append all happen under a single write guard. Concurrent
    /// postings to the same group serialize here, so balances always
    /// reflect a whole number of expenses.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotFound`] for an unknown group,
    /// [`GroupError::PayerNotMember`] or [`GroupError::ParticipantNotMember`]
    /// when the expense names outsiders, and [`GroupError::Expense`] when
    /// the amount, description, or participant list fails validation.
    pub async fn record_expense(
        &self,
        group_id: GroupId,
        input: &NewExpense,
    ) -> Result<ExpenseRecord, GroupError> {
        let mut state = self.store.write().await;
        let LedgerState {
            groups, balances, ..
        } = &mut *state;

        let group = groups
            .get_mut(&group_id)
            .ok_or(GroupError::NotFound(group_id))?;

        if !group.members.contains(&input.payer) {
            return Err(GroupError::PayerNotMember(input.payer));
        }
        for participant in &input.participants {
            if !group.members.contains(participant) {
                return Err(GroupError::ParticipantNotMember(*participant));
            }
        }

        let posting = ExpenseRecorder::prepare(input)?;

        for change in &posting.deltas {
            *balances.entry(change.user).or_insert(Decimal::ZERO) += change.delta;
        }

        let expense = ExpenseRecord {
            id: ExpenseId::new(),
            payer: posting.payer,
            amount: posting.amount,
            description: posting.description,
            participants: input.participants.clone(),
            created_at: Utc::now(),
        };
        group.expenses.push(expense.clone());

        Ok(expense)
    }

    /// Returns the members' current balances, in member order.
    ///
    /// Balances are global per user. When members also share expenses in
    /// other groups, this snapshot can legitimately sum to a non-zero
    /// figure, which the settlement engine will reject.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotFound`] for an unknown group.
    pub async fn balance_snapshot(&self, group_id: GroupId) -> Result<Vec<MemberBalance>, GroupError> {
        let state = self.store.read().await;
        let group = state
            .groups
            .get(&group_id)
            .ok_or(GroupError::NotFound(group_id))?;

        Ok(group
            .members
            .iter()
            .map(|member| MemberBalance {
                user: *member,
                balance: state.balances.get(member).copied().unwrap_or(Decimal::ZERO),
            })
            .collect())
    }
}

//! Client-side filtering of the transaction list and the tab layout built on it

use crate::model::{Transaction, TransactionType};

/// Type filter, also the selected tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Incoming,
    Outgoing,
}

impl TypeFilter {
    pub const TABS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Incoming, TypeFilter::Outgoing];

    pub fn matches(self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Incoming => kind == TransactionType::Credit,
            TypeFilter::Outgoing => kind == TransactionType::Debit,
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Incoming => "Incoming",
            TypeFilter::Outgoing => "Outgoing",
        }
    }

    pub fn panel(self) -> TabPanel {
        match self {
            TypeFilter::All => TabPanel {
                title: "All Transactions",
                description: "View all your recent transactions",
                show_type_column: true,
                show_footer: true,
            },
            TypeFilter::Incoming => TabPanel {
                title: "Incoming Transactions",
                description: "View all your incoming transactions",
                show_type_column: false,
                show_footer: false,
            },
            TypeFilter::Outgoing => TabPanel {
                title: "Outgoing Transactions",
                description: "View all your outgoing transactions",
                show_type_column: false,
                show_footer: false,
            },
        }
    }
}

/// Static layout of one tab panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub show_type_column: bool,
    pub show_footer: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    pub kind: TypeFilter,
}

impl TransactionFilter {
    /// Case-sensitive substring match on either account number, AND the type
    /// filter. An empty search matches everything.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_search = transaction.sender_account_number.contains(&self.search)
            || transaction.receiver_account_number.contains(&self.search);
        matches_search && self.kind.matches(transaction.kind)
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Rows of a tab panel: the filtered list narrowed to the tab's own type
pub fn tab_rows<'a>(filtered: &[&'a Transaction], tab: TypeFilter) -> Vec<&'a Transaction> {
    filtered
        .iter()
        .copied()
        .filter(|t| tab.matches(t.kind))
        .collect()
}

/// Footer of the "All" panel
pub fn footer_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} transactions", shown, total)
}

/// Customer model
///
/// Referenced by invoices; only the fields the dashboard lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

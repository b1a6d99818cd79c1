/// Text inputs of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    RecipientAddress,
    OrgName,
    CurrencyCode,
    DonationAmount,
    CheckRecipientAddress,
    CheckCurrencyCode,
    FeedCurrency,
    FeedAddress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: FormField, value: String },
    EthPerLocal(bool),
}

/// Everything the user typed, kept verbatim. Addresses and codes are not
/// validated here; the contract interface does its own checking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub recipient_address: String,
    pub org_name: String,
    pub currency_code: String,
    pub donation_amount: String,
    pub check_recipient_address: String,
    pub check_currency_code: String,
    pub feed_currency: String,
    pub feed_address: String,
    pub eth_per_local: bool,
}

impl FormState {
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::Input { field, value } => *self.field_mut(field) = value,
            FormEvent::EthPerLocal(checked) => self.eth_per_local = checked,
        }
        self
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::RecipientAddress => &mut self.recipient_address,
            FormField::OrgName => &mut self.org_name,
            FormField::CurrencyCode => &mut self.currency_code,
            FormField::DonationAmount => &mut self.donation_amount,
            FormField::CheckRecipientAddress => &mut self.check_recipient_address,
            FormField::CheckCurrencyCode => &mut self.check_currency_code,
            FormField::FeedCurrency => &mut self.feed_currency,
            FormField::FeedAddress => &mut self.feed_address,
        }
    }
}

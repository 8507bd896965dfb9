use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Outgoing, // Currently on screen, hidden at the next flip
    Incoming, // Off screen, being prepared with the next symbol
}

/// One of the two stacked chart surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub symbol: Symbol,
    pub visibility: Visibility,
}

impl Surface {
    pub fn visible(symbol: Symbol) -> Self {
        Self { symbol, visibility: Visibility::Visible }
    }

    pub fn hidden(symbol: Symbol) -> Self {
        Self { symbol, visibility: Visibility::Hidden }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn opacity(&self) -> f32 {
        match self.visibility {
            Visibility::Visible => 1.0,
            Visibility::Hidden => 0.0,
        }
    }

    pub fn role(&self) -> Role {
        match self.visibility {
            Visibility::Visible => Role::Outgoing,
            Visibility::Hidden => Role::Incoming,
        }
    }
}

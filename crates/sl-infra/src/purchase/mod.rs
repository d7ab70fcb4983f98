mod scripted;

pub use scripted::ScriptedPaywallPresenter;

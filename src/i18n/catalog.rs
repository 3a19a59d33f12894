//! Static translation catalog: dot-namespaced key -> locale -> text.
//!
//! The catalog is immutable data constructed at compile time; resolution
//! logic lives in the store. A cell is `None` when a locale has no text
//! for a key; lookups degrade to the key itself in that case, so a gap is
//! a cosmetic defect, never a crash.

use crate::i18n::Language;

/// One catalog row: a translation key and its per-locale texts.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub key: &'static str,
    pub pt_br: Option<&'static str>,
    pub en_us: Option<&'static str>,
}

impl Entry {
    /// Text for `language`, if this row has it.
    pub fn text(&self, language: Language) -> Option<&'static str> {
        match language.code() {
            "pt-BR" => self.pt_br,
            "en-US" => self.en_us,
            _ => None,
        }
    }
}

/// Row constructor for the common fully-translated case.
const fn entry(
    key: &'static str,
    pt_br: &'static str,
    en_us: &'static str,
) -> Entry {
    Entry {
        key,
        pt_br: Some(pt_br),
        en_us: Some(en_us),
    }
}

/// Find a row by key.
pub fn find<'a>(entries: &'a [Entry], key: &str) -> Option<&'a Entry> {
    entries.iter().find(|e| e.key == key)
}

/// Whether `key` exists in the table at all (for any locale).
pub fn contains(entries: &[Entry], key: &str) -> bool {
    find(entries, key).is_some()
}

/// Resolve `key` under `language`.
pub fn text_for(entries: &'static [Entry], key: &str, language: Language) -> Option<&'static str> {
    find(entries, key).and_then(|e| e.text(language))
}

/// The application catalog.
pub static CATALOG: &[Entry] = &[
    // ==================== Navigation ====================
    entry("nav.home", "Início", "Home"),
    entry("nav.collections", "Coletas", "Collections"),
    entry("nav.notifications", "Notificações", "Notifications"),
    entry("nav.support", "Suporte", "Support"),
    entry("nav.profile", "Perfil", "Profile"),
    // ==================== Home ====================
    entry(
        "home.slogan",
        "A gente busca, o planeta agradece",
        "We collect, the planet thanks you",
    ),
    entry("home.schedule", "Agendar Coleta", "Schedule Collection"),
    entry("home.upcoming", "Próximas Coletas", "Upcoming Collections"),
    entry("home.viewAll", "Ver todas", "View all"),
    entry(
        "home.noCollections",
        "Você não tem coletas agendadas.",
        "You don't have any scheduled collections.",
    ),
    entry("home.scheduleOne", "Agendar uma coleta", "Schedule a collection"),
    // ==================== Wallet ====================
    entry("wallet.title", "Carteira GreenGo", "GreenGo Wallet"),
    entry("wallet.balance", "Saldo disponível:", "Available balance:"),
    entry("wallet.lastPayment", "Último pagamento:", "Last payment:"),
    entry("wallet.viewStatement", "Ver extrato", "View statement"),
    entry("wallet.in", "em", "on"),
    // ==================== Collections ====================
    entry("collections.title", "Minhas Coletas", "My Collections"),
    entry("collections.details", "Ver detalhes", "View details"),
    entry("collections.status.scheduled", "Agendada", "Scheduled"),
    entry("collections.status.completed", "Concluída", "Completed"),
    entry("collections.status.cancelled", "Cancelada", "Cancelled"),
    entry("collections.status.pending", "Pendente", "Pending"),
    entry(
        "collections.estimatedQuantity",
        "Quantidade estimada:",
        "Estimated quantity:",
    ),
    entry("collections.cans", "latinhas", "cans"),
    entry("collections.collection", "Coleta", "Collection"),
    entry("collections.approximately", "aproximadamente", "approximately"),
    entry(
        "collections.detailsTitle",
        "Detalhes da Coleta",
        "Collection Details",
    ),
    entry("collections.date", "Data", "Date"),
    entry("collections.time", "Horário", "Time"),
    entry("collections.address", "Endereço", "Address"),
    entry("collections.notes", "Observações", "Notes"),
    entry("collections.collector", "Coletor", "Collector"),
    entry("collections.payment", "Pagamento", "Payment"),
    entry("collections.reschedule", "Reagendar", "Reschedule"),
    entry("collections.cancel", "Cancelar", "Cancel"),
    // ==================== Collection Editing ====================
    entry("collections.edit.title", "Editar Coleta", "Edit Collection"),
    entry(
        "collections.edit.editing",
        "Editando Coleta",
        "Editing Collection",
    ),
    entry(
        "collections.edit.description",
        "Atualize as informações da sua coleta. Todos os campos são obrigatórios.",
        "Update your collection information. All fields are required.",
    ),
    entry("collections.edit.update", "Atualizar Coleta", "Update Collection"),
    entry("collections.edit.updating", "Atualizando...", "Updating..."),
    entry(
        "collections.edit.success",
        "Coleta atualizada com sucesso!",
        "Collection updated successfully!",
    ),
    entry(
        "collections.edit.error",
        "Erro ao atualizar coleta. Tente novamente.",
        "Error updating collection. Please try again.",
    ),
    entry(
        "collections.edit.fillRequired",
        "Por favor, preencha todos os campos obrigatórios.",
        "Please fill in all required fields.",
    ),
    // ==================== Collection Cancellation ====================
    entry("collections.cancel.title", "Cancelar Coleta", "Cancel Collection"),
    entry(
        "collections.cancel.confirm",
        "Tem certeza que deseja cancelar a coleta",
        "Are you sure you want to cancel collection",
    ),
    entry(
        "collections.cancel.reason",
        "Motivo do cancelamento (opcional)",
        "Cancellation reason (optional)",
    ),
    entry(
        "collections.cancel.reasonPlaceholder",
        "Informe o motivo do cancelamento...",
        "Please provide the reason for cancellation...",
    ),
    entry(
        "collections.cancel.warning",
        "⚠️ Esta ação não pode ser desfeita. Você poderá agendar uma nova coleta a qualquer momento.",
        "⚠️ This action cannot be undone. You can schedule a new collection at any time.",
    ),
    entry("collections.cancel.keep", "Manter Coleta", "Keep Collection"),
    entry(
        "collections.cancel.confirmButton",
        "Confirmar Cancelamento",
        "Confirm Cancellation",
    ),
    entry("collections.cancel.cancelling", "Cancelando...", "Cancelling..."),
    entry(
        "collections.cancelled.title",
        "Coleta Cancelada",
        "Collection Cancelled",
    ),
    entry(
        "collections.cancelled.message",
        "foi cancelada com sucesso.",
        "has been successfully cancelled.",
    ),
    entry(
        "collections.cancelled.whatHappens",
        "O que acontece agora?",
        "What happens now?",
    ),
    entry(
        "collections.cancelled.removed",
        "Sua coleta foi removida da agenda",
        "Your collection has been removed from the schedule",
    ),
    entry(
        "collections.cancelled.noCharges",
        "Nenhuma cobrança será feita",
        "No charges will be applied",
    ),
    entry(
        "collections.cancelled.canSchedule",
        "Você pode agendar uma nova coleta a qualquer momento",
        "You can schedule a new collection at any time",
    ),
    entry(
        "collections.cancelled.newCollection",
        "Nova Coleta",
        "New Collection",
    ),
    entry(
        "collections.info.title",
        "Informações importantes",
        "Important information",
    ),
    entry(
        "collections.info.immediate",
        "As alterações entrarão em vigor imediatamente",
        "Changes will take effect immediately",
    ),
    entry(
        "collections.info.notification",
        "Você receberá uma confirmação por notificação",
        "You will receive a confirmation notification",
    ),
    entry(
        "collections.info.collectorNotified",
        "O coletor será notificado sobre as mudanças",
        "The collector will be notified about the changes",
    ),
    // ==================== Scheduling ====================
    entry("schedule.title", "Agendar Coleta", "Schedule Collection"),
    entry("schedule.dateTime", "Data e Hora", "Date & Time"),
    entry("schedule.details", "Detalhes", "Details"),
    entry("schedule.confirmation", "Confirmação", "Confirmation"),
    entry("schedule.selectDate", "Selecione uma data", "Select a date"),
    entry("schedule.selectTime", "Selecione um horário", "Select a time"),
    entry("schedule.address", "Endereço para Coleta", "Collection Address"),
    entry(
        "schedule.addressPlaceholder",
        "Rua, número, bairro, cidade",
        "Street, number, neighborhood, city",
    ),
    entry(
        "schedule.quantity",
        "Quantidade aproximada de latinhas",
        "Approximate number of cans",
    ),
    entry("schedule.quantityPlaceholder", "Ex: 120", "Ex: 120"),
    entry("schedule.quantityNote", "60 latinhas ≈ 1 kg", "60 cans ≈ 1 kg"),
    entry("schedule.notes", "Observações (opcional)", "Notes (optional)"),
    entry(
        "schedule.notesPlaceholder",
        "Informações adicionais para o coletor",
        "Additional information for the collector",
    ),
    entry("schedule.continue", "Continuar", "Continue"),
    entry("schedule.confirm", "Confirmar Agendamento", "Confirm Schedule"),
    entry("schedule.processing", "Processando...", "Processing..."),
    entry("schedule.success", "Coleta Agendada!", "Collection Scheduled!"),
    entry(
        "schedule.successMessage",
        "Sua coleta foi agendada com sucesso",
        "Your collection has been successfully scheduled",
    ),
    // ==================== Support ====================
    entry("support.title", "Suporte", "Support"),
    entry("support.chat", "Chat", "Chat"),
    entry("support.faq", "FAQ", "FAQ"),
    entry("support.contact", "Contato", "Contact"),
    entry(
        "support.typePlaceholder",
        "Digite sua mensagem...",
        "Type your message...",
    ),
    entry("support.send", "Enviar", "Send"),
    entry(
        "support.hours",
        "Horário de atendimento: Segunda a Sexta, 8h às 18h",
        "Support hours: Monday to Friday, 8am to 6pm",
    ),
    // ==================== Notifications ====================
    entry("notifications.title", "Notificações", "Notifications"),
    entry(
        "notifications.markAllRead",
        "Marcar todas como lidas",
        "Mark all as read",
    ),
    entry("notifications.all", "Todas", "All"),
    entry("notifications.unread", "Não lidas", "Unread"),
    entry("notifications.collections", "Coletas", "Collections"),
    entry("notifications.payments", "Pagamentos", "Payments"),
    // ==================== Profile ====================
    entry("profile.title", "Meu Perfil", "My Profile"),
    entry(
        "profile.personalInfo",
        "Informações Pessoais",
        "Personal Information",
    ),
    entry("profile.name", "Nome", "Name"),
    entry("profile.email", "E-mail", "Email"),
    entry("profile.phone", "Telefone", "Phone"),
    entry("profile.address", "Endereço", "Address"),
    entry(
        "profile.recentCollections",
        "Coletas Recentes",
        "Recent Collections",
    ),
    entry("profile.tabs.personal", "Pessoal", "Personal"),
    entry("profile.tabs.wallet", "Carteira", "Wallet"),
    entry("profile.tabs.settings", "Configurações", "Settings"),
    entry("profile.language", "Idioma", "Language"),
    entry("profile.darkMode", "Modo Escuro", "Dark Mode"),
    entry("profile.notifications", "Notificações", "Notifications"),
    entry(
        "profile.receiveAlerts",
        "Receber alertas e lembretes",
        "Receive alerts and reminders",
    ),
    entry(
        "profile.changeAppearance",
        "Alterar aparência do app",
        "Change app appearance",
    ),
    entry("profile.security", "Segurança", "Security"),
    entry("profile.changePassword", "Alterar senha", "Change password"),
    entry(
        "profile.twoFactor",
        "Verificação em duas etapas",
        "Two-factor verification",
    ),
    entry("profile.about", "Sobre", "About"),
    entry("profile.terms", "Termos de uso", "Terms of use"),
    entry("profile.privacy", "Política de privacidade", "Privacy policy"),
    entry("profile.version", "Versão", "Version"),
    entry(
        "profile.rights",
        "Todos os direitos reservados.",
        "All rights reserved.",
    ),
    entry("profile.preferences", "Preferências", "Preferences"),
    entry(
        "profile.editPersonalInfo",
        "Editar Informações Pessoais",
        "Edit Personal Information",
    ),
    entry(
        "profile.updateSuccess",
        "Informações atualizadas com sucesso!",
        "Information updated successfully!",
    ),
    entry(
        "profile.updateError",
        "Erro ao atualizar informações. Tente novamente.",
        "Error updating information. Please try again.",
    ),
    // ==================== Common Buttons ====================
    entry("common.back", "Voltar", "Back"),
    entry("common.save", "Salvar", "Save"),
    entry("common.cancel", "Cancelar", "Cancel"),
    entry("common.edit", "Editar", "Edit"),
    entry("common.delete", "Excluir", "Delete"),
    entry("common.close", "Fechar", "Close"),
    entry("common.saving", "Salvando...", "Saving..."),
    entry("common.loading", "Carregando...", "Loading..."),
    // ==================== Auth: Login ====================
    entry(
        "auth.login.title",
        "Entrar na sua conta",
        "Sign in to your account",
    ),
    entry(
        "auth.login.subtitle",
        "Bem-vindo de volta ao GreenGo",
        "Welcome back to GreenGo",
    ),
    entry("auth.login.email", "E-mail", "Email"),
    entry("auth.login.password", "Senha", "Password"),
    entry("auth.login.rememberMe", "Lembrar de mim", "Remember me"),
    entry("auth.login.forgotPassword", "Esqueceu a senha?", "Forgot password?"),
    entry("auth.login.button", "Entrar", "Sign in"),
    entry("auth.login.loading", "Entrando...", "Signing in..."),
    entry(
        "auth.login.noAccount",
        "Ainda não tem conta?",
        "Don't have an account?",
    ),
    entry("auth.login.createAccount", "Criar conta", "Create account"),
    entry("auth.login.or", "ou", "or"),
    entry(
        "auth.login.whatsapp",
        "Entrar com WhatsApp",
        "Continue with WhatsApp",
    ),
    // ==================== Auth: Registration ====================
    entry("auth.register.title", "Criar sua conta", "Create your account"),
    entry(
        "auth.register.subtitle",
        "Junte-se ao GreenGo e comece a reciclar",
        "Join GreenGo and start recycling",
    ),
    entry("auth.register.name", "Nome completo", "Full name"),
    entry("auth.register.email", "E-mail", "Email"),
    entry("auth.register.cpf", "CPF", "CPF (Brazilian ID)"),
    entry("auth.register.country", "País", "Country"),
    entry("auth.register.password", "Senha", "Password"),
    entry(
        "auth.register.confirmPassword",
        "Confirmar senha",
        "Confirm password",
    ),
    entry("auth.register.profileImage", "Imagem de perfil", "Profile image"),
    entry("auth.register.button", "Cadastrar", "Register"),
    entry("auth.register.hasAccount", "Já tem conta?", "Already have an account?"),
    entry("auth.register.signIn", "Entrar", "Sign in"),
    entry("auth.register.changeImage", "Alterar imagem", "Change image"),
    entry("auth.register.uploadImage", "Adicionar imagem", "Add image"),
    entry(
        "auth.register.selectCountry",
        "Selecione o país",
        "Select country",
    ),
    // ==================== Auth: Password Reset ====================
    entry("auth.reset.title", "Recuperar senha", "Reset password"),
    entry(
        "auth.reset.subtitle",
        "Enviaremos um link para seu e-mail",
        "We'll send a link to your email",
    ),
    entry("auth.reset.email", "E-mail", "Email"),
    entry("auth.reset.button", "Enviar link", "Send link"),
    entry("auth.reset.loading", "Enviando...", "Sending..."),
    entry("auth.reset.backToLogin", "Voltar para o login", "Back to login"),
    entry(
        "auth.reset.backToReset",
        "Voltar para recuperação",
        "Back to reset",
    ),
    entry(
        "auth.reset.confirm.title",
        "Verifique seu e-mail",
        "Check your email",
    ),
    entry(
        "auth.reset.confirm.subtitle",
        "Enviamos um link para redefinir sua senha",
        "We've sent a password reset link",
    ),
    entry(
        "auth.reset.confirm.message",
        "Verifique sua caixa de entrada e clique no link enviado para redefinir sua senha.",
        "Check your inbox and click the link we sent to reset your password.",
    ),
    entry("auth.reset.new.title", "Criar nova senha", "Create new password"),
    entry(
        "auth.reset.new.subtitle",
        "Sua senha deve ter pelo menos 8 caracteres",
        "Your password must be at least 8 characters",
    ),
    entry("auth.reset.new.password", "Nova senha", "New password"),
    entry(
        "auth.reset.new.confirmPassword",
        "Confirmar nova senha",
        "Confirm new password",
    ),
    entry("auth.reset.new.button", "Redefinir senha", "Reset password"),
    entry("auth.reset.new.loading", "Alterando...", "Changing..."),
    // ==================== Auth: Validation ====================
    entry(
        "auth.validation.required",
        "Este campo é obrigatório",
        "This field is required",
    ),
    entry(
        "auth.validation.email",
        "Digite um e-mail válido",
        "Enter a valid email",
    ),
    entry(
        "auth.validation.cpf",
        "Digite um CPF válido",
        "Enter a valid CPF",
    ),
    entry(
        "auth.validation.password.min",
        "A senha deve ter pelo menos 8 caracteres",
        "Password must be at least 8 characters",
    ),
    entry(
        "auth.validation.password.uppercase",
        "A senha deve conter pelo menos 1 letra maiúscula",
        "Password must contain at least 1 uppercase letter",
    ),
    entry(
        "auth.validation.password.number",
        "A senha deve conter pelo menos 1 número",
        "Password must contain at least 1 number",
    ),
    entry(
        "auth.validation.password.match",
        "As senhas não coincidem",
        "Passwords do not match",
    ),
    // ==================== Auth: Errors & Success ====================
    entry(
        "auth.error.generic",
        "Ocorreu um erro. Tente novamente.",
        "An error occurred. Please try again.",
    ),
    entry(
        "auth.error.invalidCredentials",
        "E-mail ou senha inválidos",
        "Invalid email or password",
    ),
    entry(
        "auth.error.emailExists",
        "Este e-mail já está em uso",
        "This email is already in use",
    ),
    entry(
        "auth.error.invalidToken",
        "Token inválido ou expirado",
        "Invalid or expired token",
    ),
    entry(
        "auth.success.passwordReset",
        "Senha redefinida com sucesso!",
        "Password reset successfully!",
    ),
];


/// Compile-time checked constants for every catalog key, so pages can
/// reference copy without spelling raw strings. The runtime string form
/// stays the contract; an unknown string still degrades to itself.
pub mod keys {
    pub const NAV_HOME: &str = "nav.home";
    pub const NAV_COLLECTIONS: &str = "nav.collections";
    pub const NAV_NOTIFICATIONS: &str = "nav.notifications";
    pub const NAV_SUPPORT: &str = "nav.support";
    pub const NAV_PROFILE: &str = "nav.profile";
    pub const HOME_SLOGAN: &str = "home.slogan";
    pub const HOME_SCHEDULE: &str = "home.schedule";
    pub const HOME_UPCOMING: &str = "home.upcoming";
    pub const HOME_VIEW_ALL: &str = "home.viewAll";
    pub const HOME_NO_COLLECTIONS: &str = "home.noCollections";
    pub const HOME_SCHEDULE_ONE: &str = "home.scheduleOne";
    pub const WALLET_TITLE: &str = "wallet.title";
    pub const WALLET_BALANCE: &str = "wallet.balance";
    pub const WALLET_LAST_PAYMENT: &str = "wallet.lastPayment";
    pub const WALLET_VIEW_STATEMENT: &str = "wallet.viewStatement";
    pub const WALLET_IN: &str = "wallet.in";
    pub const COLLECTIONS_TITLE: &str = "collections.title";
    pub const COLLECTIONS_DETAILS: &str = "collections.details";
    pub const COLLECTIONS_STATUS_SCHEDULED: &str = "collections.status.scheduled";
    pub const COLLECTIONS_STATUS_COMPLETED: &str = "collections.status.completed";
    pub const COLLECTIONS_STATUS_CANCELLED: &str = "collections.status.cancelled";
    pub const COLLECTIONS_STATUS_PENDING: &str = "collections.status.pending";
    pub const COLLECTIONS_ESTIMATED_QUANTITY: &str = "collections.estimatedQuantity";
    pub const COLLECTIONS_CANS: &str = "collections.cans";
    pub const COLLECTIONS_COLLECTION: &str = "collections.collection";
    pub const COLLECTIONS_APPROXIMATELY: &str = "collections.approximately";
    pub const COLLECTIONS_DETAILS_TITLE: &str = "collections.detailsTitle";
    pub const COLLECTIONS_DATE: &str = "collections.date";
    pub const COLLECTIONS_TIME: &str = "collections.time";
    pub const COLLECTIONS_ADDRESS: &str = "collections.address";
    pub const COLLECTIONS_NOTES: &str = "collections.notes";
    pub const COLLECTIONS_COLLECTOR: &str = "collections.collector";
    pub const COLLECTIONS_PAYMENT: &str = "collections.payment";
    pub const COLLECTIONS_RESCHEDULE: &str = "collections.reschedule";
    pub const COLLECTIONS_CANCEL: &str = "collections.cancel";
    pub const COLLECTIONS_EDIT_TITLE: &str = "collections.edit.title";
    pub const COLLECTIONS_EDIT_EDITING: &str = "collections.edit.editing";
    pub const COLLECTIONS_EDIT_DESCRIPTION: &str = "collections.edit.description";
    pub const COLLECTIONS_EDIT_UPDATE: &str = "collections.edit.update";
    pub const COLLECTIONS_EDIT_UPDATING: &str = "collections.edit.updating";
    pub const COLLECTIONS_EDIT_SUCCESS: &str = "collections.edit.success";
    pub const COLLECTIONS_EDIT_ERROR: &str = "collections.edit.error";
    pub const COLLECTIONS_EDIT_FILL_REQUIRED: &str = "collections.edit.fillRequired";
    pub const COLLECTIONS_CANCEL_TITLE: &str = "collections.cancel.title";
    pub const COLLECTIONS_CANCEL_CONFIRM: &str = "collections.cancel.confirm";
    pub const COLLECTIONS_CANCEL_REASON: &str = "collections.cancel.reason";
    pub const COLLECTIONS_CANCEL_REASON_PLACEHOLDER: &str = "collections.cancel.reasonPlaceholder";
    pub const COLLECTIONS_CANCEL_WARNING: &str = "collections.cancel.warning";
    pub const COLLECTIONS_CANCEL_KEEP: &str = "collections.cancel.keep";
    pub const COLLECTIONS_CANCEL_CONFIRM_BUTTON: &str = "collections.cancel.confirmButton";
    pub const COLLECTIONS_CANCEL_CANCELLING: &str = "collections.cancel.cancelling";
    pub const COLLECTIONS_CANCELLED_TITLE: &str = "collections.cancelled.title";
    pub const COLLECTIONS_CANCELLED_MESSAGE: &str = "collections.cancelled.message";
    pub const COLLECTIONS_CANCELLED_WHAT_HAPPENS: &str = "collections.cancelled.whatHappens";
    pub const COLLECTIONS_CANCELLED_REMOVED: &str = "collections.cancelled.removed";
    pub const COLLECTIONS_CANCELLED_NO_CHARGES: &str = "collections.cancelled.noCharges";
    pub const COLLECTIONS_CANCELLED_CAN_SCHEDULE: &str = "collections.cancelled.canSchedule";
    pub const COLLECTIONS_CANCELLED_NEW_COLLECTION: &str = "collections.cancelled.newCollection";
    pub const COLLECTIONS_INFO_TITLE: &str = "collections.info.title";
    pub const COLLECTIONS_INFO_IMMEDIATE: &str = "collections.info.immediate";
    pub const COLLECTIONS_INFO_NOTIFICATION: &str = "collections.info.notification";
    pub const COLLECTIONS_INFO_COLLECTOR_NOTIFIED: &str = "collections.info.collectorNotified";
    pub const SCHEDULE_TITLE: &str = "schedule.title";
    pub const SCHEDULE_DATE_TIME: &str = "schedule.dateTime";
    pub const SCHEDULE_DETAILS: &str = "schedule.details";
    pub const SCHEDULE_CONFIRMATION: &str = "schedule.confirmation";
    pub const SCHEDULE_SELECT_DATE: &str = "schedule.selectDate";
    pub const SCHEDULE_SELECT_TIME: &str = "schedule.selectTime";
    pub const SCHEDULE_ADDRESS: &str = "schedule.address";
    pub const SCHEDULE_ADDRESS_PLACEHOLDER: &str = "schedule.addressPlaceholder";
    pub const SCHEDULE_QUANTITY: &str = "schedule.quantity";
    pub const SCHEDULE_QUANTITY_PLACEHOLDER: &str = "schedule.quantityPlaceholder";
    pub const SCHEDULE_QUANTITY_NOTE: &str = "schedule.quantityNote";
    pub const SCHEDULE_NOTES: &str = "schedule.notes";
    pub const SCHEDULE_NOTES_PLACEHOLDER: &str = "schedule.notesPlaceholder";
    pub const SCHEDULE_CONTINUE: &str = "schedule.continue";
    pub const SCHEDULE_CONFIRM: &str = "schedule.confirm";
    pub const SCHEDULE_PROCESSING: &str = "schedule.processing";
    pub const SCHEDULE_SUCCESS: &str = "schedule.success";
    pub const SCHEDULE_SUCCESS_MESSAGE: &str = "schedule.successMessage";
    pub const SUPPORT_TITLE: &str = "support.title";
    pub const SUPPORT_CHAT: &str = "support.chat";
    pub const SUPPORT_FAQ: &str = "support.faq";
    pub const SUPPORT_CONTACT: &str = "support.contact";
    pub const SUPPORT_TYPE_PLACEHOLDER: &str = "support.typePlaceholder";
    pub const SUPPORT_SEND: &str = "support.send";
    pub const SUPPORT_HOURS: &str = "support.hours";
    pub const NOTIFICATIONS_TITLE: &str = "notifications.title";
    pub const NOTIFICATIONS_MARK_ALL_READ: &str = "notifications.markAllRead";
    pub const NOTIFICATIONS_ALL: &str = "notifications.all";
    pub const NOTIFICATIONS_UNREAD: &str = "notifications.unread";
    pub const NOTIFICATIONS_COLLECTIONS: &str = "notifications.collections";
    pub const NOTIFICATIONS_PAYMENTS: &str = "notifications.payments";
    pub const PROFILE_TITLE: &str = "profile.title";
    pub const PROFILE_PERSONAL_INFO: &str = "profile.personalInfo";
    pub const PROFILE_NAME: &str = "profile.name";
    pub const PROFILE_EMAIL: &str = "profile.email";
    pub const PROFILE_PHONE: &str = "profile.phone";
    pub const PROFILE_ADDRESS: &str = "profile.address";
    pub const PROFILE_RECENT_COLLECTIONS: &str = "profile.recentCollections";
    pub const PROFILE_TABS_PERSONAL: &str = "profile.tabs.personal";
    pub const PROFILE_TABS_WALLET: &str = "profile.tabs.wallet";
    pub const PROFILE_TABS_SETTINGS: &str = "profile.tabs.settings";
    pub const PROFILE_LANGUAGE: &str = "profile.language";
    pub const PROFILE_DARK_MODE: &str = "profile.darkMode";
    pub const PROFILE_NOTIFICATIONS: &str = "profile.notifications";
    pub const PROFILE_RECEIVE_ALERTS: &str = "profile.receiveAlerts";
    pub const PROFILE_CHANGE_APPEARANCE: &str = "profile.changeAppearance";
    pub const PROFILE_SECURITY: &str = "profile.security";
    pub const PROFILE_CHANGE_PASSWORD: &str = "profile.changePassword";
    pub const PROFILE_TWO_FACTOR: &str = "profile.twoFactor";
    pub const PROFILE_ABOUT: &str = "profile.about";
    pub const PROFILE_TERMS: &str = "profile.terms";
    pub const PROFILE_PRIVACY: &str = "profile.privacy";
    pub const PROFILE_VERSION: &str = "profile.version";
    pub const PROFILE_RIGHTS: &str = "profile.rights";
    pub const PROFILE_PREFERENCES: &str = "profile.preferences";
    pub const PROFILE_EDIT_PERSONAL_INFO: &str = "profile.editPersonalInfo";
    pub const PROFILE_UPDATE_SUCCESS: &str = "profile.updateSuccess";
    pub const PROFILE_UPDATE_ERROR: &str = "profile.updateError";
    pub const COMMON_BACK: &str = "common.back";
    pub const COMMON_SAVE: &str = "common.save";
    pub const COMMON_CANCEL: &str = "common.cancel";
    pub const COMMON_EDIT: &str = "common.edit";
    pub const COMMON_DELETE: &str = "common.delete";
    pub const COMMON_CLOSE: &str = "common.close";
    pub const COMMON_SAVING: &str = "common.saving";
    pub const COMMON_LOADING: &str = "common.loading";
    pub const AUTH_LOGIN_TITLE: &str = "auth.login.title";
    pub const AUTH_LOGIN_SUBTITLE: &str = "auth.login.subtitle";
    pub const AUTH_LOGIN_EMAIL: &str = "auth.login.email";
    pub const AUTH_LOGIN_PASSWORD: &str = "auth.login.password";
    pub const AUTH_LOGIN_REMEMBER_ME: &str = "auth.login.rememberMe";
    pub const AUTH_LOGIN_FORGOT_PASSWORD: &str = "auth.login.forgotPassword";
    pub const AUTH_LOGIN_BUTTON: &str = "auth.login.button";
    pub const AUTH_LOGIN_LOADING: &str = "auth.login.loading";
    pub const AUTH_LOGIN_NO_ACCOUNT: &str = "auth.login.noAccount";
    pub const AUTH_LOGIN_CREATE_ACCOUNT: &str = "auth.login.createAccount";
    pub const AUTH_LOGIN_OR: &str = "auth.login.or";
    pub const AUTH_LOGIN_WHATSAPP: &str = "auth.login.whatsapp";
    pub const AUTH_REGISTER_TITLE: &str = "auth.register.title";
    pub const AUTH_REGISTER_SUBTITLE: &str = "auth.register.subtitle";
    pub const AUTH_REGISTER_NAME: &str = "auth.register.name";
    pub const AUTH_REGISTER_EMAIL: &str = "auth.register.email";
    pub const AUTH_REGISTER_CPF: &str = "auth.register.cpf";
    pub const AUTH_REGISTER_COUNTRY: &str = "auth.register.country";
    pub const AUTH_REGISTER_PASSWORD: &str = "auth.register.password";
    pub const AUTH_REGISTER_CONFIRM_PASSWORD: &str = "auth.register.confirmPassword";
    pub const AUTH_REGISTER_PROFILE_IMAGE: &str = "auth.register.profileImage";
    pub const AUTH_REGISTER_BUTTON: &str = "auth.register.button";
    pub const AUTH_REGISTER_HAS_ACCOUNT: &str = "auth.register.hasAccount";
    pub const AUTH_REGISTER_SIGN_IN: &str = "auth.register.signIn";
    pub const AUTH_REGISTER_CHANGE_IMAGE: &str = "auth.register.changeImage";
    pub const AUTH_REGISTER_UPLOAD_IMAGE: &str = "auth.register.uploadImage";
    pub const AUTH_REGISTER_SELECT_COUNTRY: &str = "auth.register.selectCountry";
    pub const AUTH_RESET_TITLE: &str = "auth.reset.title";
    pub const AUTH_RESET_SUBTITLE: &str = "auth.reset.subtitle";
    pub const AUTH_RESET_EMAIL: &str = "auth.reset.email";
    pub const AUTH_RESET_BUTTON: &str = "auth.reset.button";
    pub const AUTH_RESET_LOADING: &str = "auth.reset.loading";
    pub const AUTH_RESET_BACK_TO_LOGIN: &str = "auth.reset.backToLogin";
    pub const AUTH_RESET_BACK_TO_RESET: &str = "auth.reset.backToReset";
    pub const AUTH_RESET_CONFIRM_TITLE: &str = "auth.reset.confirm.title";
    pub const AUTH_RESET_CONFIRM_SUBTITLE: &str = "auth.reset.confirm.subtitle";
    pub const AUTH_RESET_CONFIRM_MESSAGE: &str = "auth.reset.confirm.message";
    pub const AUTH_RESET_NEW_TITLE: &str = "auth.reset.new.title";
    pub const AUTH_RESET_NEW_SUBTITLE: &str = "auth.reset.new.subtitle";
    pub const AUTH_RESET_NEW_PASSWORD: &str = "auth.reset.new.password";
    pub const AUTH_RESET_NEW_CONFIRM_PASSWORD: &str = "auth.reset.new.confirmPassword";
    pub const AUTH_RESET_NEW_BUTTON: &str = "auth.reset.new.button";
    pub const AUTH_RESET_NEW_LOADING: &str = "auth.reset.new.loading";
    pub const AUTH_VALIDATION_REQUIRED: &str = "auth.validation.required";
    pub const AUTH_VALIDATION_EMAIL: &str = "auth.validation.email";
    pub const AUTH_VALIDATION_CPF: &str = "auth.validation.cpf";
    pub const AUTH_VALIDATION_PASSWORD_MIN: &str = "auth.validation.password.min";
    pub const AUTH_VALIDATION_PASSWORD_UPPERCASE: &str = "auth.validation.password.uppercase";
    pub const AUTH_VALIDATION_PASSWORD_NUMBER: &str = "auth.validation.password.number";
    pub const AUTH_VALIDATION_PASSWORD_MATCH: &str = "auth.validation.password.match";
    pub const AUTH_ERROR_GENERIC: &str = "auth.error.generic";
    pub const AUTH_ERROR_INVALID_CREDENTIALS: &str = "auth.error.invalidCredentials";
    pub const AUTH_ERROR_EMAIL_EXISTS: &str = "auth.error.emailExists";
    pub const AUTH_ERROR_INVALID_TOKEN: &str = "auth.error.invalidToken";
    pub const AUTH_SUCCESS_PASSWORD_RESET: &str = "auth.success.passwordReset";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_key() {
        let e = find(CATALOG, "profile.title").expect("profile.title exists");
        assert_eq!(e.pt_br, Some("Meu Perfil"));
        assert_eq!(e.en_us, Some("My Profile"));
    }

    #[test]
    fn test_find_unknown_key() {
        assert!(find(CATALOG, "profile.doesNotExist").is_none());
        assert!(!contains(CATALOG, "profile.doesNotExist"));
    }

    #[test]
    fn test_text_for_both_locales() {
        assert_eq!(
            text_for(CATALOG, "nav.home", Language::PORTUGUESE_BR),
            Some("Início")
        );
        assert_eq!(
            text_for(CATALOG, "nav.home", Language::ENGLISH_US),
            Some("Home")
        );
    }

    #[test]
    fn test_entry_text_locale_gap() {
        let gap = Entry {
            key: "test.only.english",
            pt_br: None,
            en_us: Some("English only"),
        };
        assert_eq!(gap.text(Language::ENGLISH_US), Some("English only"));
        assert_eq!(gap.text(Language::PORTUGUESE_BR), None);
    }

    #[test]
    fn test_key_constants_resolve() {
        assert!(contains(CATALOG, keys::NAV_HOME));
        assert!(contains(CATALOG, keys::WALLET_VIEW_STATEMENT));
        assert!(contains(CATALOG, keys::COLLECTIONS_CANCEL_CONFIRM_BUTTON));
        assert!(contains(CATALOG, keys::AUTH_VALIDATION_PASSWORD_MIN));
    }

    #[test]
    fn test_catalog_has_no_duplicate_keys() {
        let mut keys: Vec<_> = CATALOG.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len(), "duplicate keys in catalog");
    }

    #[test]
    fn test_catalog_keys_are_dot_namespaced() {
        for e in CATALOG {
            assert!(
                e.key.contains('.'),
                "key '{}' is not dot-namespaced",
                e.key
            );
            assert!(!e.key.starts_with('.') && !e.key.ends_with('.'));
        }
    }
}

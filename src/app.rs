use crate::config::Config;
use crate::models::{fixtures, NotificationVariant, Notifications, Page};
use crate::session::Session;
use crate::ui::components::*;
use crate::ui::pages::*;
use crate::ui::setup_styles;
use eframe::egui;
use log::{debug, info, warn};

/// Unread count shown on the header bell.
const UNREAD_NOTIFICATIONS: usize = 3;

pub struct VistaGuardApp {
    pub config: Config,
    pub session: Session,
    pub notifications: Notifications,

    // Navigation
    pub current_page: Page,

    // Status
    pub status_message: String,

    // UI Components
    sidebar: Sidebar,
    header: Header,
    status_bar: StatusBar,
    toasts: ToastStack,

    // Pages
    login: LoginPage,
    dashboard: DashboardPage,
    cameras: CamerasPage,
    events: EventsPage,
    alerts: AlertsPage,
    settings: SettingsPage,
    help: HelpPage,
}

impl VistaGuardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_styles(&cc.egui_ctx);

        let config = Config::load_or_default();

        let login = LoginPage::new(config.last_email.as_deref());
        let current_page = config.start_page;

        Self {
            config,
            session: Session::default(),
            notifications: Notifications::default(),
            current_page,
            status_message: "Ready".to_string(),
            sidebar: Sidebar::new(),
            header: Header::new(),
            status_bar: StatusBar::new(),
            toasts: ToastStack::new(),
            login,
            dashboard: DashboardPage::new(fixtures::dashboard_stats(), fixtures::feeds(), fixtures::recent_alerts()),
            cameras: CamerasPage::new(fixtures::cameras()),
            events: EventsPage::new(fixtures::events()),
            alerts: AlertsPage::new(fixtures::recent_alerts()),
            settings: SettingsPage::new(),
            help: HelpPage::new(),
        }
    }

    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            warn!("could not save config: {}", e);
        }
    }

    pub fn navigate(&mut self, page: Page) {
        if self.current_page != page {
            debug!("navigating from {:?} to {:?}", self.current_page, page);
            self.current_page = page;
        }
    }

    fn submit_login(&mut self) {
        if self.login.submit(&mut self.session, &mut self.notifications) {
            let email = self.login.email.clone();
            self.config.remember_login(&email);
            self.save_config();
            self.current_page = self.config.start_page;
            self.notifications.push("Welcome back", format!("Signed in as {}", email), NotificationVariant::Info);
            self.status_message = format!("Signed in as {}", email);
        } else {
            self.status_message = "Sign in failed".to_string();
        }
    }

    fn sign_out(&mut self) {
        self.session.logout();
        self.login = LoginPage::new(self.config.last_email.as_deref());
        self.status_message = "Signed out".to_string();
    }

    /// (visible, total) rows for pages that show a filtered table.
    fn row_count(&self) -> Option<(usize, usize)> {
        match self.current_page {
            Page::Cameras => Some((self.cameras.view().visible_count(), self.cameras.view().total_count())),
            Page::Events => Some((self.events.view().visible_count(), self.events.view().total_count())),
            Page::Alerts => Some((self.alerts.view().visible_count(), self.alerts.view().total_count())),
            _ => None,
        }
    }

    fn handle_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Navigate(page) => self.navigate(page),
            PageEvent::Status(message) => {
                info!("{}", message);
                self.status_message = message;
            }
            PageEvent::ConfigChanged => {
                self.save_config();
                self.status_message = "Preferences saved".to_string();
            }
        }
    }
}

impl eframe::App for VistaGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.toasts.show(ctx, &mut self.notifications);

        // Unauthenticated: only the login page is reachable
        if !self.session.is_authenticated() {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(LoginEvent::Submit) = self.login.show(ui) {
                    self.submit_login();
                }
            });
            return;
        }

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let initial = self.session.initial();
            if let Some(event) = self.header.show(
                ui,
                self.session.current_user_email(),
                &initial,
                UNREAD_NOTIFICATIONS,
            ) {
                match event {
                    HeaderEvent::ToggleSidebar => {
                        self.config.sidebar_collapsed = !self.config.sidebar_collapsed;
                        self.save_config();
                    }
                    HeaderEvent::ShowNotifications => self.navigate(Page::Alerts),
                    HeaderEvent::ShowSettings => self.navigate(Page::Settings),
                    HeaderEvent::SignOut => self.sign_out(),
                    HeaderEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                }
            }
        });

        // Status bar
        let row_count = self.row_count();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, &self.status_message, row_count);
        });

        // Left sidebar - navigation
        let sidebar_width = if self.config.sidebar_collapsed { 56.0 } else { 220.0 };
        egui::SidePanel::left("navigation_panel")
            .resizable(false)
            .exact_width(sidebar_width)
            .show(ctx, |ui| {
                if let Some(SidebarEvent::Navigate(page)) =
                    self.sidebar.show(ui, self.current_page, self.config.sidebar_collapsed)
                {
                    self.navigate(page);
                }
            });

        // Main content area
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(crate::ui::SLATE_50))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let event = match self.current_page {
                            Page::Dashboard => self.dashboard.show(ui),
                            Page::Cameras => self.cameras.show(ui),
                            Page::Events => self.events.show(ui),
                            Page::Alerts => self.alerts.show(ui),
                            Page::Settings => self.settings.show(ui, &mut self.config),
                            Page::Help => {
                                self.help.show(ui);
                                None
                            }
                        };
                        if let Some(event) = event {
                            self.handle_page_event(event);
                        }
                    });
            });
    }
}

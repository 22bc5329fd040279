fn main() {
    leptos::mount::mount_to_body(staffdesk_dashboard::App);
}

//! Drives a generated client and server against each other in memory.

use ipcgen_test_consumer::client::daemon_controller_client::DaemonControllerClientIpc;
use ipcgen_test_consumer::server::daemon_controller_server::DaemonControllerServerIpc;
use ipcgen_wire::Endpoint;

#[derive(Default)]
struct Client {
    outbox: Vec<Vec<u8>>,
    shown: Vec<Vec<String>>,
    asked: Vec<Vec<String>>,
}

impl Endpoint for Client {
    fn send(&mut self, message: Vec<u8>) {
        self.outbox.push(message);
    }
}

impl DaemonControllerClientIpc for Client {
    fn process_server_show_clients_reply(&mut self, client: &[String]) {
        self.shown.push(client.to_vec());
    }

    fn process_get_parameter_from_user_request(&mut self, name: &[String]) {
        self.asked.push(name.to_vec());
        let values: Vec<String> = name.iter().map(|n| format!("{n}=yes")).collect();
        self.send_reply_for_get_parameter_from_user(&values).unwrap();
    }
}

#[derive(Default)]
struct Server {
    outbox: Vec<Vec<u8>>,
    connects: Vec<String>,
    answers: Vec<Vec<String>>,
}

impl Endpoint for Server {
    fn send(&mut self, message: Vec<u8>) {
        self.outbox.push(message);
    }
}

impl DaemonControllerServerIpc for Server {
    fn process_client_connect_request(&mut self, server: &str) {
        self.connects.push(server.to_owned());
    }

    fn process_server_show_clients_request(&mut self) {
        let clients = vec!["alpha".to_owned(), "beta".to_owned()];
        self.send_reply_for_server_show_clients(&clients).unwrap();
    }

    fn process_get_parameter_from_user_reply(&mut self, value: &[String]) {
        self.answers.push(value.to_vec());
    }
}

fn deliver_to_server(client: &mut Client, server: &mut Server) {
    for message in std::mem::take(&mut client.outbox) {
        server.dispatch(&message).unwrap();
    }
}

fn deliver_to_client(server: &mut Server, client: &mut Client) {
    for message in std::mem::take(&mut server.outbox) {
        client.dispatch(&message).unwrap();
    }
}

#[test]
fn one_way_request() {
    let mut client = Client::default();
    let mut server = Server::default();

    client.send_request_client_connect("vpn.example.org").unwrap();
    assert_eq!(client.outbox[0][..2], [0, 1]);
    deliver_to_server(&mut client, &mut server);

    assert_eq!(server.connects, ["vpn.example.org"]);
    assert!(server.outbox.is_empty());
}

#[test]
fn client_request_gets_a_reply() {
    let mut client = Client::default();
    let mut server = Server::default();

    client.send_request_server_show_clients().unwrap();
    assert_eq!(client.outbox, [vec![0, 2]]);
    deliver_to_server(&mut client, &mut server);

    assert_eq!(server.outbox[0][..2], (-2i16).to_be_bytes());
    deliver_to_client(&mut server, &mut client);
    assert_eq!(client.shown, [vec!["alpha".to_owned(), "beta".to_owned()]]);
}

#[test]
fn server_request_gets_a_reply() {
    let mut client = Client::default();
    let mut server = Server::default();

    let names = vec!["mtu".to_owned(), "route".to_owned()];
    server.send_request_get_parameter_from_user(&names).unwrap();
    assert_eq!(server.outbox[0][..2], 16384i16.to_be_bytes());
    deliver_to_client(&mut server, &mut client);
    assert_eq!(client.asked, [names]);

    assert_eq!(client.outbox[0][..2], (-16384i16).to_be_bytes());
    deliver_to_server(&mut client, &mut server);
    assert_eq!(
        server.answers,
        [vec!["mtu=yes".to_owned(), "route=yes".to_owned()]]
    );
}

#[test]
fn roles_reject_their_own_requests() {
    let mut client = Client::default();
    let mut server = Server::default();

    // A client never receives opcode 1; a server never receives 16384.
    client.send_request_client_connect("x").unwrap();
    let request = client.outbox.pop().unwrap();
    assert!(client.dispatch(&request).unwrap_err().is_unknown_opcode());

    let names = vec!["x".to_owned()];
    server.send_request_get_parameter_from_user(&names).unwrap();
    let request = server.outbox.pop().unwrap();
    assert!(server.dispatch(&request).unwrap_err().is_unknown_opcode());
}
